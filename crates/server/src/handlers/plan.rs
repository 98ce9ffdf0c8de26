//! # Plan Generation Handler
//!
//! `POST /api/plan` turns `{ "inputs": <questionnaire> }` into
//! `{ "ok": true, "plan": <plan> }` with one call to the AI provider.
//!
//! Checks run in a fixed order, each one a direct failure exit: credential,
//! body parsing, presence of `inputs`, shape of `inputs`, then generation.

use crate::{
    errors::{AppError, PLAN_FAILURE},
    state::AppState,
    types::PlanResponse,
};
use axum::{body::Bytes, extract::State, Json};
use fithub::{PlanError, QuestionnaireInput};
use serde_json::Value;
use tracing::info;

/// JSON values a browser client would treat as "not provided".
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub async fn plan_handler(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanResponse>, AppError> {
    let generator = app_state
        .plan_generator
        .as_ref()
        .ok_or(AppError::Plan(PlanError::MissingApiKey))?;

    let payload: Value = serde_json::from_slice(&body).map_err(|source| AppError::MalformedBody {
        source,
        fallback: PLAN_FAILURE,
    })?;

    let inputs = payload
        .get("inputs")
        .filter(|inputs| is_present(inputs))
        .ok_or(AppError::MissingInputs)?;
    if !inputs.is_object() {
        return Err(AppError::InvalidInputs("expected a JSON object".to_string()));
    }
    let inputs: QuestionnaireInput = serde_json::from_value(inputs.clone())
        .map_err(|e| AppError::InvalidInputs(e.to_string()))?;

    info!(goal = %inputs.goal, days_per_week = %inputs.days_per_week, "Received plan request");

    let plan = generator.generate(&inputs).await?;

    Ok(Json(PlanResponse { ok: true, plan }))
}
