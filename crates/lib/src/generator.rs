//! # Plan Generator
//!
//! Turns a questionnaire into a plan with a single call to the configured AI
//! provider: render the prompt, generate, extract the JSON span, parse it and
//! optionally check it against the `GeneratedPlan` shape. There is no retry.

use crate::{
    errors::PlanError,
    extract::parse_plan_json,
    prompts::{build_plan_prompt, render_plan_prompt},
    providers::ai::AiProvider,
    types::{GeneratedPlan, QuestionnaireInput},
};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Generates workout plans through an `AiProvider`.
#[derive(Clone)]
pub struct PlanGenerator {
    pub ai_provider: Box<dyn AiProvider>,
    prompt_template: Option<String>,
    validate_schema: bool,
}

impl fmt::Debug for PlanGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanGenerator")
            .field("ai_provider", &self.ai_provider)
            .field("custom_template", &self.prompt_template.is_some())
            .field("validate_schema", &self.validate_schema)
            .finish()
    }
}

/// A builder for creating `PlanGenerator` instances.
#[derive(Default)]
pub struct PlanGeneratorBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    prompt_template: Option<String>,
    validate_schema: bool,
}

impl PlanGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider used for generation.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Overrides the default prompt template. `None` keeps the default.
    pub fn prompt_template(mut self, template: Option<String>) -> Self {
        self.prompt_template = template;
        self
    }

    /// Rejects model output that does not match the `GeneratedPlan` shape.
    pub fn validate_schema(mut self, validate: bool) -> Self {
        self.validate_schema = validate;
        self
    }

    pub fn build(self) -> Result<PlanGenerator, PlanError> {
        let ai_provider = self.ai_provider.ok_or(PlanError::MissingAiProvider)?;
        Ok(PlanGenerator {
            ai_provider,
            prompt_template: self.prompt_template,
            validate_schema: self.validate_schema,
        })
    }
}

impl PlanGenerator {
    /// Renders the prompt for `inputs` with the configured template.
    pub fn prompt_for(&self, inputs: &QuestionnaireInput) -> String {
        match &self.prompt_template {
            Some(template) => render_plan_prompt(template, inputs),
            None => build_plan_prompt(inputs),
        }
    }

    /// Generates a plan and returns the parsed JSON object as the model wrote it.
    pub async fn generate(&self, inputs: &QuestionnaireInput) -> Result<Value, PlanError> {
        info!(goal = %inputs.goal, experience = %inputs.experience, "[generate_plan] start");
        let prompt = self.prompt_for(inputs);

        let completion = self.ai_provider.generate(&prompt).await?;
        debug!(completion_len = completion.len(), "[generate_plan] completion received");

        let plan = parse_plan_json(&completion)?;

        if self.validate_schema {
            serde_json::from_value::<GeneratedPlan>(plan.clone())
                .map_err(PlanError::InvalidPlan)?;
        }

        Ok(plan)
    }
}
