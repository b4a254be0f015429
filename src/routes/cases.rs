use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use super::{ApiError, ApiResponse, error::forbidden};
use crate::{
    AppState, authz,
    auth::CurrentUser,
    middleware::ClientInfo,
    models::{
        AuditAction, Case, CaseInput, CasePayload, CaseQuery, EntityKind, MAX_ID_ATTEMPTS, Role,
        business_id, validators,
    },
};

#[tracing::instrument(name = "cases.list", skip(state, user, query))]
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<CaseQuery>,
) -> Result<Json<ApiResponse<Vec<Case>>>, ApiError> {
    let cases = state.services.cases.list(query).await?;
    let visible = authz::filter_by_role(&user, cases, |c| c.client_id);
    Ok(Json(ApiResponse::data(visible)))
}

#[tracing::instrument(name = "cases.get", skip(state, user), fields(%id))]
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Case>>, ApiError> {
    let case = state
        .services
        .cases
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Case not found".to_string()))?;

    if !authz::can_access_case(&user, &case) {
        return Err(forbidden());
    }

    Ok(Json(ApiResponse::data(case)))
}

#[tracing::instrument(name = "cases.create", skip(state, user, client_info, payload))]
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Json(payload): Json<CasePayload>,
) -> Result<(StatusCode, Json<ApiResponse<Case>>), ApiError> {
    if !authz::can_manage_cases(user.role) {
        return Err(forbidden());
    }

    let input = payload.validate_into().map_err(ApiError::Fields)?;
    check_references(&state, &input).await?;

    let business_id = match payload.case_id.as_deref() {
        Some(requested) => {
            if state.services.cases.business_id_exists(requested).await? {
                return Err(ApiError::Validation("Case ID already exists".to_string()));
            }
            requested.to_string()
        }
        None => unique_case_id(&state).await?,
    };

    let case = state
        .services
        .cases
        .create(&business_id, input, user.user_id)
        .await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Create,
            EntityKind::Case,
            case.id,
            Some(json!({
                "case_id": case.case_id,
                "case_title": case.case_title,
            })),
            &client_info,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(case, "Case created successfully")),
    ))
}

#[tracing::instrument(name = "cases.update", skip(state, user, client_info, payload), fields(%id))]
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CasePayload>,
) -> Result<Json<ApiResponse<Case>>, ApiError> {
    if !authz::can_manage_cases(user.role) {
        return Err(forbidden());
    }

    let input = payload.validate_into().map_err(ApiError::Fields)?;

    let existing = state
        .services
        .cases
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Case not found".to_string()))?;

    check_references(&state, &input).await?;

    let updated = state.services.cases.update(id, input).await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Update,
            EntityKind::Case,
            id,
            Some(json!({ "before": existing, "after": updated })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::with_message(
        updated,
        "Case updated successfully",
    )))
}

#[tracing::instrument(name = "cases.delete", skip(state, user, client_info), fields(%id))]
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !authz::can_manage_cases(user.role) {
        return Err(forbidden());
    }

    let existing = state
        .services
        .cases
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Case not found".to_string()))?;

    if let Some(hearing) = existing.hearing_date
        && hearing > validators::today()
    {
        return Err(ApiError::Validation(
            "Cannot delete case with future hearing date".to_string(),
        ));
    }

    if !state.services.cases.delete(id).await? {
        return Err(ApiError::NotFound("Case not found".to_string()));
    }

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Delete,
            EntityKind::Case,
            id,
            Some(json!({
                "case_id": existing.case_id,
                "case_title": existing.case_title,
            })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::message("Case deleted successfully")))
}

/// Referential checks shared by create and update: the client must exist,
/// and an assigned attorney must actually hold the Attorney role.
async fn check_references(state: &AppState, input: &CaseInput) -> Result<(), ApiError> {
    if state
        .services
        .customers
        .get_by_id(input.client_id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation("Client not found".to_string()));
    }

    if let Some(attorney_id) = input.assigned_attorney {
        let holds_attorney_role = state
            .services
            .users
            .get_by_id(attorney_id)
            .await?
            .is_some_and(|u| u.role == Role::Attorney);
        if !holds_attorney_role {
            return Err(ApiError::Validation(
                "Invalid attorney assignment".to_string(),
            ));
        }
    }

    Ok(())
}

/// Generate a business id, re-rolling on the rare collision.
async fn unique_case_id(state: &AppState) -> Result<String, ApiError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = business_id::case_id();
        if !state.services.cases.business_id_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
    Err(ApiError::Internal(
        "Failed to generate a unique case ID".to_string(),
    ))
}
