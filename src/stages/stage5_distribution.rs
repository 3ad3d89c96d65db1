use tracing::debug;

use crate::models::AgentArtifact;
use crate::stages::{render, DraftResult, NormalizedBrief};
use crate::templates::{fill, ChannelKind};
use crate::text::{clause, first_sentence, hashtag, slugify, terminate, truncate_words};

/// Everything the distribution stage reads from earlier stages
#[derive(Debug, Clone, Copy)]
pub struct DistributionInput<'a> {
    pub brief: &'a NormalizedBrief,
    pub draft: &'a DraftResult,
    pub creative_angle: &'a str,
    pub headline_options: &'a [String],
    pub audience_insights: &'a [String],
}

/// Execute Stage 5: distribution
///
/// Produces one artifact per channel entry, in input order. Repeated channel
/// names get repeated artifacts with distinct ids. No channels means an empty
/// plan.
pub fn execute_distribution(input: &DistributionInput<'_>) -> Vec<AgentArtifact> {
    let plan: Vec<AgentArtifact> = input
        .brief
        .channels
        .iter()
        .enumerate()
        .map(|(index, channel)| build_artifact(input, index, channel))
        .collect();

    debug!("Distribution: {} artifacts", plan.len());
    plan
}

/// Stable id for the channel at `index`: its slug plus 1-based position
pub fn artifact_id(channel: &str, index: usize) -> String {
    let slug = slugify(channel);
    let base = if slug.is_empty() { "channel" } else { slug.as_str() };
    format!("{}-{}", base, index + 1)
}

fn build_artifact(input: &DistributionInput<'_>, index: usize, channel: &str) -> AgentArtifact {
    let kind = ChannelKind::classify(channel);
    let profile = kind.profile();
    let brief = input.brief;

    let angle = clause(input.creative_angle);
    let angle = match profile.title_max_chars {
        Some(max) => truncate_words(angle, max),
        None => angle.to_string(),
    };

    AgentArtifact {
        id: artifact_id(channel, index),
        title: format!("{} | {} {}", angle, channel, profile.title_suffix),
        description: format!("{} on {}.", fill(profile.purpose, &brief.slots()), channel),
        body: build_body(input, kind, profile.hashtags),
    }
}

fn build_body(input: &DistributionInput<'_>, kind: ChannelKind, hashtag_count: usize) -> String {
    let brief = input.brief;
    let sections = &input.draft.sections;
    let opening = input
        .draft
        .opening()
        .map(|s| s.body.as_str())
        .unwrap_or(input.creative_angle);
    let hook = first_sentence(opening);
    let cta = terminate(&brief.call_to_action);

    let mut blocks: Vec<String> = match kind {
        ChannelKind::ShortSocial => vec![hook.to_string(), cta],
        ChannelKind::Professional => {
            let mut blocks = vec![opening.to_string()];
            if let Some(insight) = input.audience_insights.first() {
                blocks.push(format!("Why it matters: {}", terminate(insight)));
            }
            blocks.push(cta);
            blocks
        }
        ChannelKind::Email => {
            let subject = input
                .headline_options
                .first()
                .map(String::as_str)
                .unwrap_or(input.creative_angle);
            let mut blocks = vec![format!("Subject: {subject}"), opening.to_string()];
            // Skip the second section when it is already the closing one
            if sections.len() > 2 {
                blocks.push(sections[1].body.clone());
            }
            blocks.push(cta);
            blocks
        }
        ChannelKind::LongForm => {
            let keep = sections.len().saturating_sub(1).max(1);
            vec![
                render(&sections[..keep.min(sections.len())]),
                format!("Continue reading. {cta}"),
            ]
        }
        ChannelKind::Video => {
            let main_beat = sections
                .get(sections.len() / 2)
                .map(|s| first_sentence(&s.body).to_string())
                .unwrap_or_else(|| terminate(input.creative_angle));
            vec![
                format!("HOOK (0-10s): {hook}"),
                format!("MAIN BEAT: {main_beat}"),
                format!("CLOSE: {cta}"),
            ]
        }
        ChannelKind::Custom => vec![opening.to_string(), cta],
    };

    if hashtag_count > 0 {
        let tags = hashtags(brief, hashtag_count);
        if !tags.is_empty() {
            blocks.push(tags.join(" "));
        }
    }

    blocks.join("\n\n")
}

/// Keyword hashtags first, then the brand, without repeats
fn hashtags(brief: &NormalizedBrief, limit: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::with_capacity(limit);
    let candidates = brief
        .keywords
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(brief.brand.as_str()));

    for tag in candidates.filter_map(hashtag) {
        if tags.len() == limit {
            break;
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}
