use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fithub::PlanError;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Every variant renders as the `{ "ok": false, "error": <message> }` envelope.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from plan generation in the `fithub` crate.
    Plan(PlanError),
    /// The plan request carried no usable `inputs` field.
    MissingInputs,
    /// `inputs` was present but is not a questionnaire object.
    InvalidInputs(String),
    /// The request body is not JSON. `fallback` is reported if the parser gives no message.
    MalformedBody {
        source: serde_json::Error,
        fallback: &'static str,
    },
    /// The report request body does not describe a plan.
    InvalidReport(serde_json::Error),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `PlanError` to `AppError`.
impl From<PlanError> for AppError {
    fn from(err: PlanError) -> Self {
        AppError::Plan(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// The message fallback used when a plan failure has no message of its own.
pub const PLAN_FAILURE: &str = "Plan generation failed";

/// The message fallback used when lead capture fails without a message.
pub const LEAD_FAILURE: &str = "Lead capture failed";

fn message_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Plan(err) => {
                error!("PlanError: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_or(err.to_string(), PLAN_FAILURE),
                )
            }
            AppError::MissingInputs => {
                warn!("Plan request without inputs");
                (StatusCode::BAD_REQUEST, "Missing inputs".to_string())
            }
            AppError::InvalidInputs(msg) => {
                warn!("Plan request with invalid inputs: {msg}");
                (StatusCode::BAD_REQUEST, format!("Invalid inputs: {msg}"))
            }
            AppError::MalformedBody { source, fallback } => {
                warn!("Malformed request body: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    message_or(source.to_string(), fallback),
                )
            }
            AppError::InvalidReport(err) => {
                warn!("Invalid report request: {err}");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid report request: {err}"),
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "ok": false,
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
