//! # Plan Generator Tests
//!
//! Exercises `PlanGenerator` end to end against a `MockAiProvider`.

use anyhow::Result;
use fithub::{PlanError, PlanGeneratorBuilder, QuestionnaireInput};
use fithub_test_utils::{sample_inputs, sample_plan, MockAiProvider};
use serde_json::json;

fn inputs() -> QuestionnaireInput {
    serde_json::from_value(sample_inputs()).unwrap()
}

#[tokio::test]
async fn test_generate_returns_extracted_plan() -> Result<()> {
    let completion = format!("Sure! {}", sample_plan());
    let provider = MockAiProvider::with_response(&completion);
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider.clone()))
        .build()?;

    let plan = generator.generate(&inputs()).await?;

    assert_eq!(plan, sample_plan());
    assert_eq!(provider.call_count(), 1);
    assert!(provider.get_calls()[0].contains("Goal: Fat loss\n"));
    Ok(())
}

#[tokio::test]
async fn test_generate_passes_through_incomplete_plan_by_default() -> Result<()> {
    let provider = MockAiProvider::with_response(r#"{"headline": "Only a headline"}"#);
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .build()?;

    let plan = generator.generate(&inputs()).await?;

    assert_eq!(plan, json!({"headline": "Only a headline"}));
    Ok(())
}

#[tokio::test]
async fn test_generate_rejects_incomplete_plan_when_validating() -> Result<()> {
    let provider = MockAiProvider::with_response(r#"{"headline": "Only a headline"}"#);
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .validate_schema(true)
        .build()?;

    let err = generator.generate(&inputs()).await.unwrap_err();

    assert!(matches!(err, PlanError::InvalidPlan(_)));
    assert!(err.to_string().starts_with("Model returned an invalid plan"));
    Ok(())
}

#[tokio::test]
async fn test_validation_returns_the_original_json() -> Result<()> {
    // Extra keys survive validation because the parsed value is returned untouched.
    let mut plan = sample_plan();
    plan["extra"] = json!("kept");
    let provider = MockAiProvider::with_response(&plan.to_string());
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider))
        .validate_schema(true)
        .build()?;

    let generated = generator.generate(&inputs()).await?;

    assert_eq!(generated["extra"], "kept");
    Ok(())
}

#[tokio::test]
async fn test_generate_without_json_fails() -> Result<()> {
    let provider = MockAiProvider::with_response("Sorry, I can't do that.");
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider.clone()))
        .build()?;

    let err = generator.generate(&inputs()).await.unwrap_err();

    assert!(matches!(err, PlanError::NoJson));
    assert_eq!(provider.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_provider_error_is_propagated_without_retry() -> Result<()> {
    let provider = MockAiProvider::new();
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider.clone()))
        .build()?;

    let err = generator.generate(&inputs()).await.unwrap_err();

    assert!(matches!(err, PlanError::AiApi(_)));
    assert_eq!(provider.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_custom_prompt_template_is_used() -> Result<()> {
    let provider = MockAiProvider::with_response("{}");
    let generator = PlanGeneratorBuilder::new()
        .ai_provider(Box::new(provider.clone()))
        .prompt_template(Some("Plan for {goal} on {schedule_pref}".to_string()))
        .build()?;

    generator.generate(&inputs()).await?;

    assert_eq!(provider.get_calls(), vec!["Plan for Fat loss on Evening"]);
    Ok(())
}

#[test]
fn test_builder_requires_provider() {
    let err = PlanGeneratorBuilder::new().build().unwrap_err();
    assert!(matches!(err, PlanError::MissingAiProvider));
}
