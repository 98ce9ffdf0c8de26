pub mod gemini;
pub mod local;

use crate::errors::PlanError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;
use std::time::Duration;

/// A trait for interacting with an AI provider.
///
/// Generation is single-turn: one prompt in, one text completion out.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends `prompt` to the model and returns the raw text completion.
    async fn generate(&self, prompt: &str) -> Result<String, PlanError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Builds the HTTP client shared by the providers.
///
/// Without a timeout a hanging upstream call stalls its request indefinitely.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, PlanError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(PlanError::ReqwestClientBuild)
}
