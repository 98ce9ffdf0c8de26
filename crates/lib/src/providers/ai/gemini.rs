use crate::{
    errors::PlanError,
    providers::ai::{build_http_client, AiProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::time::Duration;
use tracing::debug;

/// The public Gemini API base URL.
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The model used for plan generation unless configured otherwise.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    #[serde(default)]
    content: ContentResponse,
}

#[derive(Deserialize, Debug, Default)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiResponse {
    /// Joins every part of the first candidate. A prompt blocked before any
    /// candidate was produced is an error naming the block reason.
    fn into_text(self) -> Result<String, PlanError> {
        match self.candidates.into_iter().next() {
            Some(candidate) => Ok(candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect()),
            None => match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => Err(PlanError::AiApi(format!(
                    "Text not available. Response was blocked due to {reason}"
                ))),
                None => Ok(String::new()),
            },
        }
    }
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider` for `model`, rooted at `api_base`.
    pub fn new(
        api_base: &str,
        model: &str,
        api_key: String,
        timeout: Option<Duration>,
    ) -> Result<Self, PlanError> {
        if api_key.is_empty() {
            return Err(PlanError::MissingApiKey);
        }
        let client = build_http_client(timeout)?;
        let api_url = format!(
            "{}/models/{}:generateContent",
            api_base.trim_end_matches('/'),
            model
        );
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// The `generateContent` endpoint this provider posts to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(api_url = %self.api_url, prompt_len = prompt.len(), "--> Sending prompt to Gemini");

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(PlanError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PlanError::AiApi(format!("{status}: {error_text}")));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(PlanError::AiDeserialization)?;

        let raw_response = gemini_response.into_text()?;

        debug!("<-- Completion from Gemini: {}", &raw_response);

        Ok(raw_response)
    }
}
