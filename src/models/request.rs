use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Wire names of the fields every brief must carry, in declared order
pub const REQUIRED_FIELDS: [&str; 10] = [
    "brand",
    "audience",
    "objective",
    "format",
    "tone",
    "keywords",
    "callToAction",
    "channels",
    "creativeBrief",
    "lengthPreference",
];

/// A creative brief as it arrives from the caller.
///
/// The enum-valued fields stay as raw strings here; the normalizer is the
/// one place that turns them into [`ContentFormat`], [`ContentTone`] and
/// [`LengthPreference`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub brand: String,
    pub audience: String,
    pub objective: String,
    pub format: String,
    pub tone: String,
    pub keywords: Vec<String>,
    pub call_to_action: String,
    pub channels: Vec<String>,
    pub creative_brief: String,
    pub length_preference: String,
}

/// Shape of the content piece being drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFormat {
    Article,
    Newsletter,
    SocialThread,
    LandingPage,
    VideoScript,
    EmailSequence,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 6] = [
        Self::Article,
        Self::Newsletter,
        Self::SocialThread,
        Self::LandingPage,
        Self::VideoScript,
        Self::EmailSequence,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Newsletter => "Newsletter",
            Self::SocialThread => "Social Thread",
            Self::LandingPage => "Landing Page",
            Self::VideoScript => "Video Script",
            Self::EmailSequence => "Email Sequence",
        }
    }

    /// Formats that read best with short, punchy headlines
    pub fn prefers_punchy_headlines(self) -> bool {
        matches!(self, Self::SocialThread | Self::VideoScript)
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_label(value, "format", &Self::ALL, |f| f.label())
    }
}

/// Voice the package is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTone {
    Inspirational,
    Informative,
    Playful,
    Authoritative,
    Bold,
    Empathetic,
}

impl ContentTone {
    pub const ALL: [ContentTone; 6] = [
        Self::Inspirational,
        Self::Informative,
        Self::Playful,
        Self::Authoritative,
        Self::Bold,
        Self::Empathetic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Inspirational => "Inspirational",
            Self::Informative => "Informative",
            Self::Playful => "Playful",
            Self::Authoritative => "Authoritative",
            Self::Bold => "Bold",
            Self::Empathetic => "Empathetic",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_label(value, "tone", &Self::ALL, |t| t.label())
    }
}

/// How much copy the draft should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthPreference {
    Short,
    Medium,
    Long,
}

impl LengthPreference {
    pub const ALL: [LengthPreference; 3] = [Self::Short, Self::Medium, Self::Long];

    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }

    /// Target sentence count for one draft paragraph
    pub fn sentences_per_section(self) -> usize {
        match self {
            Self::Short => 2,
            Self::Medium => 4,
            Self::Long => 5,
        }
    }

    /// Upper bound on audience insights
    pub fn max_insights(self) -> usize {
        match self {
            Self::Short => 3,
            Self::Medium => 4,
            Self::Long => 5,
        }
    }

    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        parse_label(value, "lengthPreference", &Self::ALL, |l| l.label())
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(ContentFormat, ContentTone, LengthPreference);

/// Match a trimmed label case-insensitively against the declared members
fn parse_label<T: Copy>(
    value: &str,
    field: &'static str,
    members: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, ValidationError> {
    let trimmed = value.trim();
    members
        .iter()
        .copied()
        .find(|m| label(*m).eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ValidationError::UnsupportedValue {
            field,
            value: trimmed.to_string(),
            expected: members
                .iter()
                .map(|m| label(*m))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// The Supernova Studio brief used across the test suite
#[cfg(test)]
pub(crate) fn sample_request() -> GenerationRequest {
    GenerationRequest {
        brand: "Supernova Studio".to_string(),
        audience: "product marketing leaders".to_string(),
        objective: "launch sequencing for a flagship feature".to_string(),
        format: "Article".to_string(),
        tone: "Inspirational".to_string(),
        keywords: vec![
            "go-to-market momentum".to_string(),
            "customer proof".to_string(),
        ],
        call_to_action: "Book a strategy lab".to_string(),
        channels: vec!["LinkedIn".to_string(), "Email".to_string()],
        creative_brief:
            "Highlight the transition from feature launches to narrative-driven campaigns."
                .to_string(),
        length_preference: "Medium".to_string(),
    }
}
