use axum::{
    Extension, Json,
    extract::{Query, State},
};

use super::{ApiError, ApiResponse, error::forbidden};
use crate::{
    AppState, authz,
    auth::CurrentUser,
    models::{CaseReport, CaseReportQuery, EngagementReport, EngagementReportQuery},
};

#[tracing::instrument(name = "reports.cases", skip(state, user, query))]
pub async fn cases(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<CaseReportQuery>,
) -> Result<Json<ApiResponse<CaseReport>>, ApiError> {
    if !authz::can_view_reports(user.role) {
        return Err(forbidden());
    }

    let report = state.services.reports.case_report(query).await?;
    Ok(Json(ApiResponse::data(report)))
}

#[tracing::instrument(name = "reports.engagements", skip(state, user, query))]
pub async fn engagements(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<EngagementReportQuery>,
) -> Result<Json<ApiResponse<EngagementReport>>, ApiError> {
    if !authz::can_view_reports(user.role) {
        return Err(forbidden());
    }

    let report = state.services.reports.engagement_report(query).await?;
    Ok(Json(ApiResponse::data(report)))
}
