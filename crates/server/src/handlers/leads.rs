//! # Lead Intake Handler
//!
//! `POST /api/leads` acknowledges a captured lead by echoing it back. Leads are
//! logged but never validated, stored, or deduplicated.

use crate::{
    errors::{AppError, LEAD_FAILURE},
    types::LeadResponse,
};
use axum::{body::Bytes, Json};
use serde_json::Value;
use tracing::info;

/// Keeps only the last four digits of a phone number for logging.
fn mask_phone(phone: &str) -> String {
    let digits: Vec<char> = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let visible = digits.len().saturating_sub(4);
    digits
        .iter()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { *c })
        .collect()
}

pub async fn leads_handler(body: Bytes) -> Result<Json<LeadResponse>, AppError> {
    let received: Value = serde_json::from_slice(&body).map_err(|source| AppError::MalformedBody {
        source,
        fallback: LEAD_FAILURE,
    })?;

    let field = |key: &str| received.get(key).and_then(Value::as_str).unwrap_or_default();
    info!(
        lead_name = field("name"),
        phone = %mask_phone(field("phone")),
        goal = field("goal"),
        "Lead received"
    );

    Ok(Json(LeadResponse {
        ok: true,
        received,
    }))
}
