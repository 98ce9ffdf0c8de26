//! # JSON Extraction
//!
//! Recovers a JSON object from a free-form text completion by slicing from the
//! first `{` to the last `}`. Prose before the real object that contains a `{`
//! corrupts the slice; callers that need a guarantee should enable schema
//! validation on the generator.

use crate::errors::PlanError;
use serde_json::Value;

/// Returns the inclusive span between the first `{` and the last `}` of `text`.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let first = text.find('{')?;
    let last = text.rfind('}')?;
    if last < first {
        return None;
    }
    Some(&text[first..=last])
}

/// Extracts and parses the JSON object embedded in a model completion.
pub fn parse_plan_json(text: &str) -> Result<Value, PlanError> {
    let span = extract_json_span(text).ok_or(PlanError::NoJson)?;
    serde_json::from_str(span).map_err(PlanError::InvalidJson)
}
