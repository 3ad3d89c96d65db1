use tracing::{debug, info};

use crate::error::{GenerationFailure, PipelineError};
use crate::models::{GenerationRequest, GenerationResponse};
use crate::stages::{
    execute_closing, execute_concept, execute_distribution, execute_draft, execute_outline,
    execute_strategy, normalize, DistributionInput, DraftInput, CTA_VARIANTS, MAX_HEADLINES,
    MIN_HEADLINES,
};
use crate::templates::section_count;

/// Synthesize a full content package from a brief.
///
/// Runs every stage in dependency order over one normalized brief. The call
/// is pure: the same request always yields the same response. Either a fully
/// populated response comes back or nothing does.
pub fn generate(request: &GenerationRequest) -> Result<GenerationResponse, PipelineError> {
    let brief = normalize(request)?;
    info!(
        "Generating {} {} package for {} ({} channels)",
        brief.length, brief.format, brief.brand, brief.channels.len()
    );

    let strategy = execute_strategy(&brief);
    let concept = execute_concept(&brief);
    let outline = execute_outline(brief.format, brief.length);

    let draft = execute_draft(&DraftInput {
        brief: &brief,
        outline: &outline,
        creative_angle: &concept.creative_angle,
        audience_insights: &strategy.audience_insights,
    });

    let distribution_plan = execute_distribution(&DistributionInput {
        brief: &brief,
        draft: &draft,
        creative_angle: &concept.creative_angle,
        headline_options: &concept.headline_options,
        audience_insights: &strategy.audience_insights,
    });

    let closing = execute_closing(&brief);

    let response = GenerationResponse {
        headline_options: concept.headline_options,
        mission_summary: strategy.mission_summary,
        creative_angle: concept.creative_angle,
        audience_insights: strategy.audience_insights,
        outline,
        draft: draft.text,
        distribution_plan,
        call_to_action_variants: closing.call_to_action_variants,
        sources: closing.sources,
    };

    verify_response(
        &response,
        brief.channels.len(),
        section_count(brief.format, brief.length),
    )?;
    info!(
        "Generated package: {} headlines, {} sections, {} artifacts",
        response.headline_options.len(),
        response.outline.len(),
        response.distribution_plan.len()
    );

    Ok(response)
}

/// Check the shape guarantees of an assembled response
pub fn verify_response(
    response: &GenerationResponse,
    channel_count: usize,
    expected_sections: usize,
) -> Result<(), GenerationFailure> {
    check_list(
        "concept",
        "headlineOptions",
        &response.headline_options,
        MIN_HEADLINES,
        MAX_HEADLINES,
    )?;
    check_list("strategy", "audienceInsights", &response.audience_insights, 2, 5)?;
    check_list(
        "closing",
        "callToActionVariants",
        &response.call_to_action_variants,
        CTA_VARIANTS,
        CTA_VARIANTS,
    )?;
    check_list("closing", "sources", &response.sources, 2, 4)?;

    if response.outline.len() != expected_sections {
        return Err(GenerationFailure::new(
            "outline",
            format!(
                "expected {} sections, got {}",
                expected_sections,
                response.outline.len()
            ),
        ));
    }

    if response.distribution_plan.len() != channel_count {
        return Err(GenerationFailure::new(
            "distribution",
            format!(
                "expected {} artifacts, got {}",
                channel_count,
                response.distribution_plan.len()
            ),
        ));
    }

    for (i, artifact) in response.distribution_plan.iter().enumerate() {
        if response.distribution_plan[..i].iter().any(|a| a.id == artifact.id) {
            return Err(GenerationFailure::new(
                "distribution",
                format!("duplicate artifact id {}", artifact.id),
            ));
        }
    }

    let blank = [
        ("strategy", response.mission_summary.as_str()),
        ("concept", response.creative_angle.as_str()),
        ("draft", response.draft.as_str()),
    ];
    if let Some(&(stage, _)) = blank.iter().find(|(_, text)| text.trim().is_empty()) {
        return Err(GenerationFailure::new(stage, "produced empty text"));
    }

    debug!("Response passed shape checks");
    Ok(())
}

fn check_list(
    stage: &'static str,
    field: &str,
    items: &[String],
    min: usize,
    max: usize,
) -> Result<(), GenerationFailure> {
    if !(min..=max).contains(&items.len()) {
        return Err(GenerationFailure::new(
            stage,
            format!("{} has {} entries, expected {}..={}", field, items.len(), min, max),
        ));
    }

    for (i, item) in items.iter().enumerate() {
        if item.trim().is_empty() || items[..i].contains(item) {
            return Err(GenerationFailure::new(
                stage,
                format!("{field} entry {i} is blank or repeated"),
            ));
        }
    }
    Ok(())
}
