use tracing::debug;

use crate::error::ValidationError;
use crate::models::{ContentFormat, ContentTone, GenerationRequest, LengthPreference};
use crate::templates::Slots;
use crate::text::{clause, single_line};

/// The brief after trimming, parsing and cleanup.
///
/// Every later stage reads this and nothing else from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBrief {
    pub brand: String,
    pub audience: String,
    pub objective: String,
    pub format: ContentFormat,
    pub tone: ContentTone,
    /// Canonical keyword set: trimmed, blanks dropped, first occurrence kept
    pub keywords: Vec<String>,
    pub call_to_action: String,
    /// Trimmed, blanks dropped, duplicates kept in order
    pub channels: Vec<String>,
    pub creative_brief: String,
    pub length: LengthPreference,
}

impl NormalizedBrief {
    /// First keyword, or the objective when no keywords were given
    pub fn lead_keyword(&self) -> &str {
        self.keywords
            .first()
            .map(String::as_str)
            .unwrap_or(self.objective.as_str())
    }

    /// The one or two keywords that lead the creative angle
    pub fn focus_keywords(&self) -> Vec<&str> {
        self.keywords.iter().take(2).map(String::as_str).collect()
    }

    /// Template slots with `keyword` bound to the lead keyword.
    ///
    /// Objective and call to action lose trailing punctuation so templates
    /// can embed them mid-sentence.
    pub fn slots(&self) -> Slots<'_> {
        self.slots_with_keyword(self.lead_keyword())
    }

    pub fn slots_with_keyword<'a>(&'a self, keyword: &'a str) -> Slots<'a> {
        Slots {
            brand: &self.brand,
            audience: &self.audience,
            objective: clause(&self.objective),
            keyword,
            format: self.format.label(),
            cta: clause(&self.call_to_action),
        }
    }
}

/// Ask used when the brief leaves the call to action blank
pub const DEFAULT_CALL_TO_ACTION: &str = "Get in touch";

/// Perform Stage 0: request normalization
///
/// This stage:
/// 1. Parses format, tone and length preference into their closed enums
/// 2. Flattens every text field to one line and rejects blank required ones
/// 3. Builds the canonical keyword set and the cleaned channel list
pub fn normalize(request: &GenerationRequest) -> Result<NormalizedBrief, ValidationError> {
    let format = ContentFormat::parse(&request.format)?;
    let tone = ContentTone::parse(&request.tone)?;
    let length = LengthPreference::parse(&request.length_preference)?;

    let brand = required_text(&request.brand, "brand")?;
    let audience = required_text(&request.audience, "audience")?;
    let objective = required_text(&request.objective, "objective")?;
    let creative_brief = required_text(&request.creative_brief, "creativeBrief")?;

    let call_to_action = match single_line(&request.call_to_action) {
        cta if cta.is_empty() => DEFAULT_CALL_TO_ACTION.to_string(),
        cta => cta,
    };

    let mut keywords: Vec<String> = Vec::with_capacity(request.keywords.len());
    for keyword in request.keywords.iter().map(|k| single_line(k)) {
        if !keyword.is_empty() && !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }

    // Duplicate channels are kept: each entry gets its own artifact
    let channels: Vec<String> = request
        .channels
        .iter()
        .map(|c| single_line(c))
        .filter(|c| !c.is_empty())
        .collect();

    debug!(
        "Normalized brief: format={}, tone={}, length={}, {} keywords, {} channels",
        format,
        tone,
        length,
        keywords.len(),
        channels.len()
    );

    Ok(NormalizedBrief {
        brand,
        audience,
        objective,
        format,
        tone,
        keywords,
        call_to_action,
        channels,
        creative_brief,
        length,
    })
}

fn required_text(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let flattened = single_line(value);
    if flattened.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(flattened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_request;

    #[test]
    fn test_normalize_sample_brief() {
        let brief = normalize(&sample_request()).unwrap();

        assert_eq!(brief.brand, "Supernova Studio");
        assert_eq!(brief.format, ContentFormat::Article);
        assert_eq!(brief.tone, ContentTone::Inspirational);
        assert_eq!(brief.length, LengthPreference::Medium);
        assert_eq!(brief.keywords, vec!["go-to-market momentum", "customer proof"]);
        assert_eq!(brief.channels, vec!["LinkedIn", "Email"]);
        assert_eq!(brief.lead_keyword(), "go-to-market momentum");
    }

    #[test]
    fn test_blank_brand_is_rejected() {
        let mut request = sample_request();
        request.brand = "   ".to_string();

        let err = normalize(&request).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "brand" });
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let mut request = sample_request();
        request.format = "Podcast".to_string();

        let err = normalize(&request).unwrap_err();
        assert_eq!(err.field(), Some("format"));
    }

    #[test]
    fn test_blank_creative_brief_uses_wire_name() {
        let mut request = sample_request();
        request.creative_brief = "\n\t".to_string();

        let err = normalize(&request).unwrap_err();
        assert_eq!(err.field(), Some("creativeBrief"));
    }

    #[test]
    fn test_keywords_trimmed_and_deduplicated() {
        let mut request = sample_request();
        request.keywords = vec![
            " customer proof ".to_string(),
            "".to_string(),
            "customer proof".to_string(),
            "   ".to_string(),
            "narrative".to_string(),
        ];

        let brief = normalize(&request).unwrap();
        assert_eq!(brief.keywords, vec!["customer proof", "narrative"]);
    }

    #[test]
    fn test_duplicate_channels_are_kept() {
        let mut request = sample_request();
        request.channels = vec![
            "LinkedIn".to_string(),
            " ".to_string(),
            " LinkedIn".to_string(),
            "linkedin".to_string(),
        ];

        let brief = normalize(&request).unwrap();
        assert_eq!(brief.channels, vec!["LinkedIn", "LinkedIn", "linkedin"]);
    }

    #[test]
    fn test_blank_cta_falls_back_to_default() {
        let mut request = sample_request();
        request.call_to_action = "  ".to_string();
        request.keywords.clear();

        let brief = normalize(&request).unwrap();
        assert_eq!(brief.call_to_action, DEFAULT_CALL_TO_ACTION);
        assert_eq!(brief.lead_keyword(), brief.objective);
    }

    #[test]
    fn test_free_text_is_flattened_to_one_line() {
        let mut request = sample_request();
        request.creative_brief = "First idea.\n\nSecond idea.\n## Not a section".to_string();
        request.audience = "product\nmarketing   leaders".to_string();
        request.call_to_action = " Book a\n\nstrategy lab ".to_string();
        request.keywords = vec!["customer\nproof".to_string(), "customer proof".to_string()];
        request.channels = vec!["Linked\nIn".to_string()];

        let brief = normalize(&request).unwrap();
        assert_eq!(brief.creative_brief, "First idea. Second idea. ## Not a section");
        assert_eq!(brief.audience, "product marketing leaders");
        assert_eq!(brief.call_to_action, "Book a strategy lab");
        assert_eq!(brief.keywords, vec!["customer proof"]);
        assert_eq!(brief.channels, vec!["Linked In"]);
    }
}
