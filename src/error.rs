use thiserror::Error;

/// A brief that cannot be turned into a content package.
///
/// Field names use the wire spelling (`callToAction`, `lengthPreference`, ...)
/// so the message can be shown to whoever filled in the brief.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload was not a JSON object at all
    #[error("Missing payload")]
    MissingPayload,

    /// A required field was absent or null
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    /// A required text field was blank after trimming
    #[error("Field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// An enum field named something outside its declared members
    #[error("Field `{field}` has unsupported value {value:?} (expected one of: {expected})")]
    UnsupportedValue {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// A field was present but had the wrong JSON type
    #[error("Field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

impl ValidationError {
    /// The offending field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingPayload => None,
            Self::MissingField { field }
            | Self::EmptyField { field }
            | Self::UnsupportedValue { field, .. }
            | Self::WrongType { field, .. } => Some(*field),
        }
    }
}

/// An internal fault while synthesizing the package.
///
/// Never retried: the same brief would fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{stage} stage produced an invalid result: {reason}")]
pub struct GenerationFailure {
    pub stage: &'static str,
    pub reason: String,
}

impl GenerationFailure {
    pub fn new(stage: &'static str, reason: impl Into<String>) -> Self {
        Self {
            stage,
            reason: reason.into(),
        }
    }
}

/// Everything `generate` can fail with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Unable to generate content: {0}")]
    Generation(#[from] GenerationFailure),
}
