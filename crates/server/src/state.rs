//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. Everything in it is immutable and shared by
//! `Arc`.

use crate::config::AppConfig;
use fithub::{
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    PlanGenerator, PlanGeneratorBuilder,
};
use std::{sync::Arc, time::Duration};
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// `None` when the Gemini credential is missing; plan requests then fail
    /// before any external call is made.
    pub plan_generator: Option<Arc<PlanGenerator>>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let timeout = config.ai.request_timeout_secs.map(Duration::from_secs);

    let ai_provider: Option<Box<dyn AiProvider>> = match config.ai.provider.as_str() {
        "gemini" => match config.ai.api_key.clone() {
            Some(api_key) => Some(Box::new(GeminiProvider::new(
                &config.ai.api_base,
                &config.ai.model,
                api_key,
                timeout,
            )?) as Box<dyn AiProvider>),
            None => {
                warn!("GEMINI_API_KEY is not set; plan generation requests will fail.");
                None
            }
        },
        "local" => {
            let api_url = config.ai.api_url.clone().ok_or_else(|| {
                anyhow::anyhow!("ai.api_url is required for the local provider")
            })?;
            Some(Box::new(LocalAiProvider::new(
                api_url,
                config.ai.api_key.clone(),
                Some(config.ai.model.clone()),
                timeout,
            )?) as Box<dyn AiProvider>)
        }
        other => {
            return Err(anyhow::anyhow!("Unsupported AI provider: {other}"));
        }
    };

    let plan_generator = match ai_provider {
        Some(ai_provider) => {
            info!(provider = %config.ai.provider, model = %config.ai.model, "Initialized AI provider");
            Some(Arc::new(
                PlanGeneratorBuilder::new()
                    .ai_provider(ai_provider)
                    .prompt_template(config.plan.prompt_template.clone())
                    .validate_schema(config.plan.validate_schema)
                    .build()?,
            ))
        }
        None => None,
    };

    Ok(AppState {
        config: Arc::new(config),
        plan_generator,
    })
}
