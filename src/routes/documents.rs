//! Document references: collection-level list and create only. Document
//! uploads are not audit-tracked; only the three business entities are.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};

use super::{ApiError, ApiResponse};
use crate::{
    AppState,
    auth::CurrentUser,
    models::{Document, DocumentPayload, DocumentQuery, MAX_ID_ATTEMPTS, business_id},
};

#[tracing::instrument(name = "documents.list", skip(state, query))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DocumentQuery>,
) -> Result<Json<ApiResponse<Vec<Document>>>, ApiError> {
    let documents = state.services.documents.list(query).await?;
    Ok(Json(ApiResponse::data(documents)))
}

#[tracing::instrument(name = "documents.create", skip(state, user, payload))]
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<DocumentPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), ApiError> {
    let input = payload.validate_into().map_err(ApiError::Fields)?;

    let business_id = unique_document_id(&state).await?;
    let document = state
        .services
        .documents
        .create(&business_id, input, user.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            document,
            "Document uploaded successfully",
        )),
    ))
}

/// Generate a business id, re-rolling on the rare collision.
async fn unique_document_id(state: &AppState) -> Result<String, ApiError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = business_id::document_id();
        if !state
            .services
            .documents
            .business_id_exists(&candidate)
            .await?
        {
            return Ok(candidate);
        }
    }
    Err(ApiError::Internal(
        "Failed to generate a unique document ID".to_string(),
    ))
}
