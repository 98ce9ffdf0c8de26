//! # JSON Extraction Tests
//!
//! Covers the first-`{`-to-last-`}` heuristic, including the ways it is
//! known to go wrong when the model wraps the object in prose.

use fithub::extract::{extract_json_span, parse_plan_json};
use fithub::PlanError;
use serde_json::json;

#[test]
fn test_extracts_object_surrounded_by_prose() {
    let text = "Sure! Here is your plan:\n```json\n{\"headline\": \"Test\"}\n```\nGood luck!";
    let value = parse_plan_json(text).unwrap();
    assert_eq!(value, json!({"headline": "Test"}));
}

#[test]
fn test_braces_inside_string_values_are_preserved() {
    let text = r#"{"headline": "Use {tempo} work", "summary": "x"}"#;
    let value = parse_plan_json(text).unwrap();
    assert_eq!(value["headline"], "Use {tempo} work");
}

#[test]
fn test_no_braces_is_no_json_error() {
    let err = parse_plan_json("I cannot help with that.").unwrap_err();
    assert!(matches!(err, PlanError::NoJson));
    assert_eq!(err.to_string(), "Model did not return JSON");
}

#[test]
fn test_missing_closing_brace_is_no_json_error() {
    let err = parse_plan_json("{\"headline\": \"cut off").unwrap_err();
    assert!(matches!(err, PlanError::NoJson));
}

#[test]
fn test_stray_brace_before_object_corrupts_the_slice() {
    // Prose with a brace before the real object widens the span and fails to parse.
    let text = "Use {sets} x {reps}. {\"headline\": \"Test\"}";
    assert_eq!(
        extract_json_span(text),
        Some("{sets} x {reps}. {\"headline\": \"Test\"}")
    );
    let err = parse_plan_json(text).unwrap_err();
    assert!(matches!(err, PlanError::InvalidJson(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_extracted_array_span_is_not_unwrapped() {
    // Only braces count; an outer array is cut down to its objects.
    let text = "[{\"a\": 1}, {\"b\": 2}]";
    assert_eq!(extract_json_span(text), Some("{\"a\": 1}, {\"b\": 2}"));
    assert!(parse_plan_json(text).is_err());
}
