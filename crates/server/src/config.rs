//! # Application Configuration
//!
//! This module defines the configuration structure for the `fithub-server` and
//! loads it from layered sources: built-in defaults, an optional `config.yml`
//! file, and environment variables.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use fithub::constants::{
    BRAND_NAME, DEFAULT_ADDRESS_LINE, DEFAULT_CITY_LINE, DEFAULT_PHONE_E164, DEFAULT_SUNDAY_HOURS,
    DEFAULT_WEEKDAY_HOURS, DEFAULT_WHATSAPP_MESSAGE,
};
use fithub::providers::ai::gemini::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// The environment variable holding the Gemini credential.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    pub port: u16,
    pub ai: AiConfig,
    pub plan: PlanConfig,
    pub brand: BrandConfig,
}

/// Settings for the text generation service.
#[derive(Deserialize, Clone)]
pub struct AiConfig {
    /// The type of provider ("gemini" or "local").
    pub provider: String,
    pub model: String,
    /// Base URL of the Gemini API.
    pub api_base: String,
    /// Full chat completions URL, required by the "local" provider.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Falls back to `GEMINI_API_KEY`. An empty key counts as missing.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Unset means upstream calls may block indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Settings for plan generation.
#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// Reject model output that does not match the plan shape.
    pub validate_schema: bool,
    #[serde(default)]
    pub prompt_template: Option<String>,
}

/// Contact details shown on the site and in reports.
#[derive(Debug, Deserialize, Clone)]
pub struct BrandConfig {
    pub name: String,
    pub phone_e164: String,
    pub city_line: String,
    pub address_line: String,
    pub weekday_hours: String,
    pub sunday_hours: String,
    pub whatsapp_message: String,
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from defaults, a file, and environment variables.
///
/// - The file is `config_path_override` when given (it must exist), otherwise an
///   optional `config.yml` next to this crate's manifest.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `FITHUB_...` variables (e.g. `FITHUB_AI__MODEL`).
/// - The API key falls back to `GEMINI_API_KEY`.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults.
        .set_default("port", 9090)?
        .set_default("ai.provider", "gemini")?
        .set_default("ai.model", DEFAULT_GEMINI_MODEL)?
        .set_default("ai.api_base", DEFAULT_GEMINI_API_BASE)?
        .set_default("plan.validate_schema", false)?
        .set_default("brand.name", BRAND_NAME)?
        .set_default("brand.phone_e164", DEFAULT_PHONE_E164)?
        .set_default("brand.city_line", DEFAULT_CITY_LINE)?
        .set_default("brand.address_line", DEFAULT_ADDRESS_LINE)?
        .set_default("brand.weekday_hours", DEFAULT_WEEKDAY_HOURS)?
        .set_default("brand.sunday_hours", DEFAULT_SUNDAY_HOURS)?
        .set_default("brand.whatsapp_message", DEFAULT_WHATSAPP_MESSAGE)?;

    // Layer 2: Config file.
    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            if content.is_some() {
                info!("Loading configuration from '{default_path}'.");
            }
            content
        }
    };
    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Layer 3: Load environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Layer 4: Load prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("FITHUB")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // An empty key (e.g. from an unset `${GEMINI_API_KEY}` substitution) is no key.
    config.ai.api_key = config
        .ai
        .api_key
        .take()
        .filter(|key| !key.is_empty())
        .or_else(|| env::var(GEMINI_API_KEY_VAR).ok().filter(|key| !key.is_empty()));

    Ok(config)
}
