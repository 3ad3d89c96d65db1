use tracing::debug;

use crate::models::ContentFormat;
use crate::stages::NormalizedBrief;
use crate::templates::{fill, tone_profile};
use crate::text::{capitalize, join_natural, push_unique};

/// Bounds on the headline list
pub const MIN_HEADLINES: usize = 3;
pub const MAX_HEADLINES: usize = 6;

/// Output of the concept stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptResult {
    /// One-sentence positioning statement
    pub creative_angle: String,
    /// 3 to 6 distinct headline candidates
    pub headline_options: Vec<String>,
}

/// Execute Stage 2: concept
///
/// The angle leads with the first one or two keywords in input order; there
/// is no ranking beyond that. Headlines come from the tone's template set,
/// punchy for social threads and video scripts, plus one format-specific
/// headline.
pub fn execute_concept(brief: &NormalizedBrief) -> ConceptResult {
    let creative_angle = build_angle(brief);
    let headline_options = build_headlines(brief);

    debug!(
        "Concept: angle of {} chars, {} headlines",
        creative_angle.len(),
        headline_options.len()
    );

    ConceptResult {
        creative_angle,
        headline_options,
    }
}

fn build_angle(brief: &NormalizedBrief) -> String {
    let focus = match brief.focus_keywords().as_slice() {
        [] => brief.slots().objective.to_string(),
        keywords => join_natural(keywords),
    };

    // Not re-cased: keywords must survive verbatim
    fill(
        tone_profile(brief.tone).angle,
        &brief.slots_with_keyword(&focus),
    )
}

fn build_headlines(brief: &NormalizedBrief) -> Vec<String> {
    let profile = tone_profile(brief.tone);
    let templates = if brief.format.prefers_punchy_headlines() {
        &profile.punchy_headlines
    } else {
        &profile.headlines
    };

    let mut headlines = Vec::with_capacity(MAX_HEADLINES);
    for (i, template) in templates.iter().enumerate() {
        // Alternate keywords across templates so later ones surface too
        let keyword = brief
            .keywords
            .get(i % brief.keywords.len().max(1))
            .map(String::as_str)
            .unwrap_or(brief.lead_keyword());
        push_unique(
            &mut headlines,
            capitalize(&fill(template, &brief.slots_with_keyword(keyword))),
        );
    }

    push_unique(
        &mut headlines,
        capitalize(&fill(format_headline(brief.format), &brief.slots())),
    );

    headlines.truncate(MAX_HEADLINES);

    let mut part = 1;
    while headlines.len() < MIN_HEADLINES {
        push_unique(&mut headlines, format!("{}: Part {}", brief.brand, part));
        part += 1;
    }

    headlines
}

fn format_headline(format: ContentFormat) -> &'static str {
    match format {
        ContentFormat::Article => "{brand} on {objective}: A Field Guide for {audience}",
        ContentFormat::Newsletter => "This Week at {brand}: {keyword}",
        ContentFormat::SocialThread => "A Thread on {keyword}",
        ContentFormat::LandingPage => "{brand}: Built for {audience}",
        ContentFormat::VideoScript => "Watch: {keyword} in Action",
        ContentFormat::EmailSequence => "Your {keyword} Starter Series from {brand}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_request, ContentTone};
    use crate::stages::normalize;

    #[test]
    fn test_angle_uses_first_two_keywords() {
        let mut request = sample_request();
        request.keywords.push("strategic narrative".to_string());
        let brief = normalize(&request).unwrap();

        let result = execute_concept(&brief);
        assert!(result.creative_angle.contains("go-to-market momentum and customer proof"));
        assert!(!result.creative_angle.contains("strategic narrative"));
        assert!(result.creative_angle.contains("Supernova Studio"));
    }

    #[test]
    fn test_angle_falls_back_to_objective() {
        let mut request = sample_request();
        request.keywords.clear();
        let brief = normalize(&request).unwrap();

        let result = execute_concept(&brief);
        assert!(result
            .creative_angle
            .contains("launch sequencing for a flagship feature"));
    }

    #[test]
    fn test_headline_bounds_for_every_tone_and_format() {
        let mut request = sample_request();
        for tone in ContentTone::ALL {
            for format in ContentFormat::ALL {
                request.tone = tone.label().to_string();
                request.format = format.label().to_string();
                let brief = normalize(&request).unwrap();

                let headlines = execute_concept(&brief).headline_options;
                assert!(
                    (MIN_HEADLINES..=MAX_HEADLINES).contains(&headlines.len()),
                    "{tone}/{format}: {headlines:?}"
                );
                for (i, h) in headlines.iter().enumerate() {
                    assert!(!headlines[i + 1..].contains(h), "{tone}/{format}: {h}");
                }
            }
        }
    }

    #[test]
    fn test_social_thread_headlines_are_shorter() {
        let mut request = sample_request();
        let article = execute_concept(&normalize(&request).unwrap()).headline_options;

        request.format = "Social Thread".to_string();
        let thread = execute_concept(&normalize(&request).unwrap()).headline_options;

        let avg = |h: &[String]| h.iter().map(|s| s.len()).sum::<usize>() / h.len();
        assert!(avg(&thread) < avg(&article));
    }
}
