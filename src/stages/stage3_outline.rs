use tracing::debug;

use crate::models::{ContentFormat, LengthPreference};
use crate::templates::skeleton;

/// Execute Stage 3: outline
///
/// A purely structural decision: the skeleton depends only on format and
/// length, never on brief content.
pub fn execute_outline(format: ContentFormat, length: LengthPreference) -> Vec<String> {
    let outline: Vec<String> = skeleton(format, length)
        .iter()
        .map(|title| title.to_string())
        .collect();

    debug!("Outline: {} sections for {}/{}", outline.len(), format, length);
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_matches_skeleton_table() {
        let outline = execute_outline(ContentFormat::Article, LengthPreference::Medium);
        assert_eq!(
            outline,
            vec!["Hook", "Context", "Core Argument", "Proof Points", "Call to Action"]
        );
    }

    #[test]
    fn test_email_sequence_long_has_seven_emails() {
        let outline = execute_outline(ContentFormat::EmailSequence, LengthPreference::Long);
        assert_eq!(outline.len(), 7);
        assert!(outline.iter().all(|t| t.starts_with("Email ")));
    }
}
