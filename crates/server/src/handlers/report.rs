use crate::{errors::AppError, state::AppState};
use axum::{body::Bytes, extract::State, response::Html};
use fithub::report::{render_report, ReportRequest};
use tracing::info;

/// Renders a printable HTML report for a previously generated plan.
pub async fn report_handler(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let request: ReportRequest = serde_json::from_slice(&body).map_err(AppError::InvalidReport)?;
    info!(headline = %request.plan.headline, "Rendering plan report");
    Ok(Html(render_report(&app_state.config.brand.name, &request)))
}
