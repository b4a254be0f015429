//! Engagement CRUD. Any authenticated user may record engagements; reads
//! are narrowed to owned rows for Client accounts.

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
        AuditAction, Engagement, EngagementPayload, EngagementQuery, EntityKind, MAX_ID_ATTEMPTS,
        business_id,
    },
};

#[tracing::instrument(name = "engagements.list", skip(state, user, query))]
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<EngagementQuery>,
) -> Result<Json<ApiResponse<Vec<Engagement>>>, ApiError> {
    let engagements = state.services.engagements.list(query).await?;
    let visible = authz::filter_by_role(&user, engagements, |e| e.client_id);
    Ok(Json(ApiResponse::data(visible)))
}

#[tracing::instrument(name = "engagements.get", skip(state, user), fields(%id))]
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Engagement>>, ApiError> {
    let engagement = state
        .services
        .engagements
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Engagement not found".to_string()))?;

    // Engagements are customer-scoped, so customer access rules apply.
    if !authz::can_access_customer(&user, engagement.client_id) {
        return Err(forbidden());
    }

    Ok(Json(ApiResponse::data(engagement)))
}

#[tracing::instrument(name = "engagements.create", skip(state, user, client_info, payload))]
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Json(payload): Json<EngagementPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Engagement>>), ApiError> {
    let input = payload.validate_into().map_err(ApiError::Fields)?;

    if state
        .services
        .customers
        .get_by_id(input.client_id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation("Client not found".to_string()));
    }

    let business_id = match payload.engagement_id.as_deref() {
        Some(requested) => {
            if state
                .services
                .engagements
                .business_id_exists(requested)
                .await?
            {
                return Err(ApiError::Validation(
                    "Engagement ID already exists".to_string(),
                ));
            }
            requested.to_string()
        }
        None => unique_engagement_id(&state).await?,
    };

    let engagement = state
        .services
        .engagements
        .create(&business_id, input, user.user_id)
        .await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Create,
            EntityKind::Engagement,
            engagement.id,
            Some(json!({
                "engagement_id": engagement.engagement_id,
                "engagement_type": engagement.engagement_type,
            })),
            &client_info,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            engagement,
            "Engagement created successfully",
        )),
    ))
}

#[tracing::instrument(name = "engagements.update", skip(state, user, client_info, payload), fields(%id))]
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EngagementPayload>,
) -> Result<Json<ApiResponse<Engagement>>, ApiError> {
    let input = payload.validate_into().map_err(ApiError::Fields)?;

    let existing = state
        .services
        .engagements
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Engagement not found".to_string()))?;

    if state
        .services
        .customers
        .get_by_id(input.client_id)
        .await?
        .is_none()
    {
        return Err(ApiError::Validation("Client not found".to_string()));
    }

    let updated = state.services.engagements.update(id, input).await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Update,
            EntityKind::Engagement,
            id,
            Some(json!({ "before": existing, "after": updated })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::with_message(
        updated,
        "Engagement updated successfully",
    )))
}

#[tracing::instrument(name = "engagements.delete", skip(state, user, client_info), fields(%id))]
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let existing = state
        .services
        .engagements
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Engagement not found".to_string()))?;

    if !state.services.engagements.delete(id).await? {
        return Err(ApiError::NotFound("Engagement not found".to_string()));
    }

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Delete,
            EntityKind::Engagement,
            id,
            Some(json!({
                "engagement_id": existing.engagement_id,
                "engagement_type": existing.engagement_type,
            })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::message("Engagement deleted successfully")))
}

/// Generate a business id, re-rolling on the rare collision.
async fn unique_engagement_id(state: &AppState) -> Result<String, ApiError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = business_id::engagement_id();
        if !state
            .services
            .engagements
            .business_id_exists(&candidate)
            .await?
        {
            return Ok(candidate);
        }
    }
    Err(ApiError::Internal(
        "Failed to generate a unique engagement ID".to_string(),
    ))
}
