use thiserror::Error;

/// Custom error types for plan generation.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("Missing GEMINI_API_KEY")]
    MissingApiKey,
    #[error("AI provider is not configured")]
    MissingAiProvider,
    #[error("Model did not return JSON")]
    NoJson,
    #[error("{0}")]
    InvalidJson(serde_json::Error),
    #[error("Model returned an invalid plan: {0}")]
    InvalidPlan(serde_json::Error),
}
