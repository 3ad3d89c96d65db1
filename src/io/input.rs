use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::ValidationError;
use crate::models::{GenerationRequest, REQUIRED_FIELDS};

/// Parse a brief JSON file into a GenerationRequest
pub fn parse_brief_file(path: &Path) -> Result<GenerationRequest> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_brief_json(&content)
}

/// Parse a brief JSON string into a GenerationRequest.
///
/// Rejects the first absent or null required field by name, in declared
/// order, before anything else looks at the payload. Field-level problems
/// surface as a [`ValidationError`] inside the returned error.
pub fn parse_brief_json(json: &str) -> Result<GenerationRequest> {
    let payload: Value = serde_json::from_str(json).context("Failed to parse brief JSON")?;
    Ok(brief_from_value(payload)?)
}

/// Build a request from an already-parsed JSON payload
pub fn brief_from_value(mut payload: Value) -> Result<GenerationRequest, ValidationError> {
    let object = payload
        .as_object_mut()
        .ok_or(ValidationError::MissingPayload)?;

    for field in REQUIRED_FIELDS {
        if object.get(field).is_none_or(Value::is_null) {
            return Err(ValidationError::MissingField { field });
        }
    }

    // The web form sends keywords as one comma/newline separated string
    let split_keywords = match object.get("keywords") {
        Some(Value::String(raw)) => Some(
            raw.split([',', '\n'])
                .map(|k| Value::String(k.trim().to_string()))
                .collect::<Vec<_>>(),
        ),
        _ => None,
    };
    if let Some(keywords) = split_keywords {
        object.insert("keywords".to_string(), Value::Array(keywords));
    }

    Ok(GenerationRequest {
        brand: text_field(object, "brand")?,
        audience: text_field(object, "audience")?,
        objective: text_field(object, "objective")?,
        format: text_field(object, "format")?,
        tone: text_field(object, "tone")?,
        keywords: list_field(object, "keywords")?,
        call_to_action: text_field(object, "callToAction")?,
        channels: list_field(object, "channels")?,
        creative_brief: text_field(object, "creativeBrief")?,
        length_preference: text_field(object, "lengthPreference")?,
    })
}

type Object = serde_json::Map<String, Value>;

fn text_field(object: &Object, field: &'static str) -> Result<String, ValidationError> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn list_field(object: &Object, field: &'static str) -> Result<Vec<String>, ValidationError> {
    let wrong_type = ValidationError::WrongType {
        field,
        expected: "a list of strings",
    };

    match object.get(field) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(|| wrong_type.clone()))
            .collect(),
        _ => Err(wrong_type),
    }
}
