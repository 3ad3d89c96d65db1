use tracing::debug;

use crate::stages::NormalizedBrief;
use crate::templates::{fill, tone_profile};
use crate::text::terminate;

/// Everything the draft stage reads from earlier stages
#[derive(Debug, Clone, Copy)]
pub struct DraftInput<'a> {
    pub brief: &'a NormalizedBrief,
    pub outline: &'a [String],
    pub creative_angle: &'a str,
    pub audience_insights: &'a [String],
}

/// One outline section expanded into prose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSection {
    pub title: String,
    pub body: String,
}

/// Output of the draft stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    /// Sections in outline order
    pub sections: Vec<DraftSection>,
    /// The rendered draft: `## Title` line, paragraph, blank line between sections
    pub text: String,
}

impl DraftResult {
    pub fn opening(&self) -> Option<&DraftSection> {
        self.sections.first()
    }

    pub fn closing(&self) -> Option<&DraftSection> {
        self.sections.last()
    }
}

/// Execute Stage 4: draft
///
/// For each outline section:
/// 1. The opening section carries the creative angle
/// 2. Every section carries at least one keyword, round-robin
/// 3. The second section carries the creative brief verbatim
/// 4. Middle sections weave in audience insights while there is room
/// 5. The closing section restates the call to action
///
/// Tone filler pads each paragraph up to the length preference's target.
pub fn execute_draft(input: &DraftInput<'_>) -> DraftResult {
    let count = input.outline.len();
    let sections: Vec<DraftSection> = input
        .outline
        .iter()
        .enumerate()
        .map(|(index, title)| DraftSection {
            title: title.clone(),
            body: compose_paragraph(input, index, count),
        })
        .collect();

    let text = render(&sections);

    debug!(
        "Draft: {} sections, {} chars",
        sections.len(),
        text.len()
    );

    DraftResult { sections, text }
}

/// Render sections as heading line + paragraph blocks
pub fn render(sections: &[DraftSection]) -> String {
    sections
        .iter()
        .map(|s| format!("## {}\n{}", s.title, s.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn compose_paragraph(input: &DraftInput<'_>, index: usize, count: usize) -> String {
    let brief = input.brief;
    let profile = tone_profile(brief.tone);
    let target = brief.length.sentences_per_section();
    let is_closing = index + 1 == count;

    let mut sentences: Vec<String> = Vec::with_capacity(target + 2);

    if index == 0 {
        sentences.push(terminate(input.creative_angle));
    }

    let mut keywords = section_keywords(&brief.keywords, index, count);
    if keywords.is_empty() {
        keywords.push(brief.slots().objective);
    }
    for (offset, keyword) in keywords.iter().enumerate() {
        let line = profile.keyword_lines[(index + offset) % profile.keyword_lines.len()];
        sentences.push(fill(line, &brief.slots_with_keyword(keyword)));
    }

    if index == 1 && !is_closing {
        sentences.push(terminate(&brief.creative_brief));
    }

    if index > 0 && !is_closing && sentences.len() < target && !input.audience_insights.is_empty() {
        let insight = &input.audience_insights[(index - 1) % input.audience_insights.len()];
        sentences.push(terminate(insight));
    }

    // The closing line and the ask always end the final section
    let reserved = if is_closing { 2 } else { 0 };
    let mut voice = 0;
    while sentences.len() + reserved < target && voice < profile.voice.len() {
        let line = profile.voice[(index + voice) % profile.voice.len()];
        sentences.push(fill(line, &brief.slots()));
        voice += 1;
    }

    if is_closing {
        sentences.push(profile.closing.to_string());
        sentences.push(terminate(&brief.call_to_action));
    }

    sentences.join(" ")
}

/// Keywords a section must carry.
///
/// Section `i` always gets `keywords[i % k]`; when there are more keywords
/// than sections the surplus ones go to section `j % count`, so every keyword
/// lands somewhere in the draft.
fn section_keywords(keywords: &[String], index: usize, count: usize) -> Vec<&str> {
    if keywords.is_empty() || count == 0 {
        return vec![];
    }

    let mut assigned = vec![keywords[index % keywords.len()].as_str()];
    for (j, keyword) in keywords.iter().enumerate().skip(count) {
        if j % count == index && !assigned.contains(&keyword.as_str()) {
            assigned.push(keyword);
        }
    }
    assigned
}
