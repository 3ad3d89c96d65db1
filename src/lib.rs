pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod stages;
pub mod templates;
pub mod text;

pub use error::{GenerationFailure, PipelineError, ValidationError};
pub use io::{parse_brief_file, parse_brief_json, write_response_json, ContentReport};
pub use models::{
    AgentArtifact, ContentFormat, ContentTone, GenerationRequest, GenerationResponse,
    LengthPreference,
};
pub use pipeline::generate;
pub use stages::{normalize, NormalizedBrief};
