//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port with the Gemini provider
//! pointed at an `httpmock::MockServer`, so every request goes through the
//! same code path as in production.

// Not every test file uses every helper.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use fithub::constants::*;
use fithub_server::{
    config::{AiConfig, AppConfig, BrandConfig, PlanConfig},
    router::create_router,
    state::build_app_state,
};
use httpmock::MockServer;
use reqwest::Client;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// The model name the test server is configured with.
pub const TEST_MODEL: &str = "gemini-test";

/// The API key the test server sends to the mock Gemini API.
pub const TEST_API_KEY: &str = "test-key";

/// The path the mock Gemini API must answer on.
pub const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

/// A configuration pointing the Gemini provider at `mock_server`.
pub fn test_config(mock_server: &MockServer) -> AppConfig {
    AppConfig {
        port: 0,
        ai: AiConfig {
            provider: "gemini".to_string(),
            model: TEST_MODEL.to_string(),
            api_base: mock_server.url("/v1beta"),
            api_url: None,
            api_key: Some(TEST_API_KEY.to_string()),
            request_timeout_secs: Some(5),
        },
        plan: PlanConfig {
            validate_schema: false,
            prompt_template: None,
        },
        brand: BrandConfig {
            name: BRAND_NAME.to_string(),
            phone_e164: DEFAULT_PHONE_E164.to_string(),
            city_line: DEFAULT_CITY_LINE.to_string(),
            address_line: DEFAULT_ADDRESS_LINE.to_string(),
            weekday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            sunday_hours: DEFAULT_SUNDAY_HOURS.to_string(),
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
        },
    }
}

impl TestApp {
    /// Spawns the server with a working Gemini configuration.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(|_| {}).await
    }

    /// Spawns the server as if `GEMINI_API_KEY` were not set.
    pub async fn spawn_without_api_key() -> Result<Self> {
        Self::spawn_with(|config| config.ai.api_key = None).await
    }

    /// Spawns the server after letting the caller adjust the configuration.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppConfig)) -> Result<Self> {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start_async().await;
        let mut config = test_config(&mock_server);
        customize(&mut config);
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        tokio::spawn(async move {
            let app = create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Posts `body` as JSON to `path`.
    pub async fn post_json(&self, path: &str, body: &Value) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Posts `body` verbatim with a JSON content type.
    pub async fn post_raw(&self, path: &str, body: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await?)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The receiver might already be gone if the server task panicked,
            // so we ignore the result of send.
            let _ = tx.send(());
        }
    }
}
