use tracing::debug;

use crate::models::ContentFormat;
use crate::stages::NormalizedBrief;
use crate::templates::{fill, tone_profile};
use crate::text::{capitalize, push_unique, sentence};

/// Output of the strategy stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyResult {
    pub mission_summary: String,
    /// 2 to 5 distinct statements, capped by the length preference
    pub audience_insights: Vec<String>,
}

/// Execute Stage 1: strategy
///
/// Binds brand, audience and objective into a mission statement, then infers
/// audience motivations from the audience, objective, tone and format.
pub fn execute_strategy(brief: &NormalizedBrief) -> StrategyResult {
    let mission_summary = build_mission(brief);
    let audience_insights = build_insights(brief);

    debug!(
        "Strategy: mission of {} chars, {} insights",
        mission_summary.len(),
        audience_insights.len()
    );

    StrategyResult {
        mission_summary,
        audience_insights,
    }
}

fn build_mission(brief: &NormalizedBrief) -> String {
    let slots = brief.slots();
    let profile = tone_profile(brief.tone);

    format!(
        "Position {} as the partner {} rely on for {}. This {} should help them {}.",
        brief.brand,
        brief.audience,
        slots.objective,
        brief.format.label().to_lowercase(),
        profile.mission_outcome
    )
}

fn build_insights(brief: &NormalizedBrief) -> Vec<String> {
    let slots = brief.slots();
    let profile = tone_profile(brief.tone);
    let mut insights = Vec::new();

    // Pain point first, then the tone's lens on motivation
    push_unique(
        &mut insights,
        sentence(&format!(
            "{} are under pressure to deliver on {} without adding complexity",
            capitalize(&brief.audience),
            slots.objective
        )),
    );
    push_unique(&mut insights, capitalize(&fill(profile.insight_lens, &slots)));

    if let Some(keyword) = brief.keywords.first() {
        push_unique(
            &mut insights,
            format!("Concrete evidence of {keyword} earns their trust faster than broad claims."),
        );
    }

    push_unique(&mut insights, format_insight(brief.format).to_string());

    if brief.keywords.len() > 1 {
        let supporting = &brief.keywords[1];
        push_unique(
            &mut insights,
            format!("They look for {supporting} before committing budget or headcount."),
        );
    }

    push_unique(
        &mut insights,
        "They share resources that make them look prepared in front of their own stakeholders."
            .to_string(),
    );

    insights.truncate(brief.length.max_insights());
    insights
}

fn format_insight(format: ContentFormat) -> &'static str {
    match format {
        ContentFormat::Article => "They read deeply when the argument respects their expertise.",
        ContentFormat::Newsletter => "They reward a recurring, skimmable update that saves them research time.",
        ContentFormat::SocialThread => "They scroll fast, so the first line has to earn the next one.",
        ContentFormat::LandingPage => "They decide within seconds whether the page speaks to their problem.",
        ContentFormat::VideoScript => "They stay for stories that show the outcome, not just describe it.",
        ContentFormat::EmailSequence => "They open emails that feel personal and promise one clear takeaway.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_request;
    use crate::stages::normalize;

    #[test]
    fn test_mission_binds_brand_audience_objective() {
        let brief = normalize(&sample_request()).unwrap();
        let result = execute_strategy(&brief);

        assert!(result.mission_summary.contains("Supernova Studio"));
        assert!(result.mission_summary.contains("product marketing leaders"));
        assert!(result
            .mission_summary
            .contains("launch sequencing for a flagship feature"));
        assert_eq!(result.mission_summary.matches(". ").count(), 1);
    }

    #[test]
    fn test_insight_count_follows_length() {
        let mut request = sample_request();
        for (length, expected) in [("Short", 3), ("Medium", 4), ("Long", 5)] {
            request.length_preference = length.to_string();
            let brief = normalize(&request).unwrap();
            assert_eq!(execute_strategy(&brief).audience_insights.len(), expected);
        }
    }

    #[test]
    fn test_insights_distinct_without_keywords() {
        let mut request = sample_request();
        request.keywords.clear();
        request.length_preference = "Long".to_string();
        let brief = normalize(&request).unwrap();

        let insights = execute_strategy(&brief).audience_insights;
        assert!((2..=5).contains(&insights.len()));
        for (i, insight) in insights.iter().enumerate() {
            assert!(!insights[i + 1..].contains(insight));
        }
    }

    #[test]
    fn test_strategy_is_deterministic() {
        let brief = normalize(&sample_request()).unwrap();
        assert_eq!(execute_strategy(&brief), execute_strategy(&brief));
    }
}
