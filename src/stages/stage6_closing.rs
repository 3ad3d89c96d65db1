use tracing::debug;

use crate::models::LengthPreference;
use crate::stages::NormalizedBrief;
use crate::templates::{fill, tone_profile};
use crate::text::{capitalize, push_unique};

/// Exactly this many call-to-action variants are produced
pub const CTA_VARIANTS: usize = 3;

/// Output of the closing stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingResult {
    /// Direct, curiosity-driven and urgency-driven phrasings, in that order
    pub call_to_action_variants: Vec<String>,
    /// 2 to 4 suggested reference placeholders
    pub sources: Vec<String>,
}

/// Execute Stage 6: closing
///
/// Sources are synthetic suggestions for where supporting material could come
/// from; nothing is fetched.
pub fn execute_closing(brief: &NormalizedBrief) -> ClosingResult {
    let call_to_action_variants = build_cta_variants(brief);
    let sources = build_sources(brief);

    debug!(
        "Closing: {} CTA variants, {} sources",
        call_to_action_variants.len(),
        sources.len()
    );

    ClosingResult {
        call_to_action_variants,
        sources,
    }
}

fn build_cta_variants(brief: &NormalizedBrief) -> Vec<String> {
    let profile = tone_profile(brief.tone);
    let slots = brief.slots();

    let mut variants = Vec::with_capacity(CTA_VARIANTS);
    for template in [profile.cta_direct, profile.cta_curiosity, profile.cta_urgency] {
        push_unique(&mut variants, fill(template, &slots));
    }

    // Templates differ in fixed text, but a CTA that happens to echo one of
    // them could still collide
    let fallbacks = [
        format!("Take the next step: {}.", slots.cta),
        format!("{} is one click away.", capitalize(slots.cta)),
        format!("Ask {} how to get started.", brief.brand),
    ];
    for fallback in fallbacks {
        if variants.len() == CTA_VARIANTS {
            break;
        }
        push_unique(&mut variants, fallback);
    }

    variants
}

fn build_sources(brief: &NormalizedBrief) -> Vec<String> {
    let objective = brief.slots().objective;
    let mut sources = vec![
        format!(
            "Industry benchmark survey of {} on {} (suggested)",
            brief.audience, objective
        ),
        format!("Analyst perspective on trends shaping {objective} (suggested)"),
    ];

    if let Some(keyword) = brief.keywords.first() {
        sources.push(format!(
            "Customer case study demonstrating {keyword} (suggested)"
        ));
    }

    if brief.length != LengthPreference::Short {
        sources.push(format!(
            "{} first-party performance data for {} (suggested)",
            brief.brand, brief.format.label()
        ));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_request, ContentTone};
    use crate::stages::normalize;

    #[test]
    fn test_three_distinct_variants_for_every_tone() {
        let mut request = sample_request();
        for tone in ContentTone::ALL {
            request.tone = tone.label().to_string();
            let brief = normalize(&request).unwrap();

            let variants = execute_closing(&brief).call_to_action_variants;
            assert_eq!(variants.len(), CTA_VARIANTS, "{tone}");
            assert_ne!(variants[0], variants[1]);
            assert_ne!(variants[1], variants[2]);
            assert_ne!(variants[0], variants[2]);
            assert!(variants.iter().all(|v| v.contains("Book a strategy lab")), "{tone}");
        }
    }

    #[test]
    fn test_variant_styles() {
        let brief = normalize(&sample_request()).unwrap();
        let variants = execute_closing(&brief).call_to_action_variants;

        assert!(variants[0].starts_with("Book a strategy lab"));
        assert!(variants[1].contains('?'));
        assert!(variants[2].contains("now"));
    }

    #[test]
    fn test_trailing_punctuation_not_doubled() {
        let mut request = sample_request();
        request.call_to_action = "Book a strategy lab.".to_string();
        let brief = normalize(&request).unwrap();

        for variant in execute_closing(&brief).call_to_action_variants {
            assert!(!variant.contains(".."), "{variant}");
        }
    }

    #[test]
    fn test_default_cta_does_not_repeat_brand() {
        let mut request = sample_request();
        request.call_to_action = "   ".to_string();
        for tone in ContentTone::ALL {
            request.tone = tone.label().to_string();
            let brief = normalize(&request).unwrap();

            let variants = execute_closing(&brief).call_to_action_variants;
            assert_eq!(variants.len(), CTA_VARIANTS, "{tone}");
            for variant in &variants {
                assert!(variant.contains("Get in touch"), "{tone}: {variant}");
                assert!(variant.matches("Supernova Studio").count() <= 1, "{tone}: {variant}");
            }
        }
    }

    #[test]
    fn test_source_count_bounds() {
        let mut request = sample_request();
        request.keywords.clear();
        request.length_preference = "Short".to_string();
        let brief = normalize(&request).unwrap();
        assert_eq!(execute_closing(&brief).sources.len(), 2);

        let brief = normalize(&sample_request()).unwrap();
        let sources = execute_closing(&brief).sources;
        assert_eq!(sources.len(), 4);
        assert!(sources.iter().any(|s| s.contains("product marketing leaders")));
    }
}
