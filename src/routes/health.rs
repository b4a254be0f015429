//! Health check endpoint for probes and monitoring.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// "healthy" or "unhealthy".
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
}

#[tracing::instrument(name = "health.check", skip(state))]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.health_check().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let status = if database {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(HealthStatus {
            status: if database { "healthy" } else { "unhealthy" },
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}
