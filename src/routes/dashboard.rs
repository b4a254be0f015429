use axum::{Json, extract::State};

use super::{ApiError, ApiResponse};
use crate::{AppState, models::DashboardStats};

/// Aggregate counts, upcoming hearings, and recent activity. Available to
/// any authenticated user; reads bypass the audit write path entirely.
#[tracing::instrument(name = "dashboard.stats", skip(state))]
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, ApiError> {
    let stats = state.services.reports.dashboard_stats().await?;
    Ok(Json(ApiResponse::data(stats)))
}
