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
        AuditAction, Customer, CustomerPayload, CustomerQuery, EntityKind, MAX_ID_ATTEMPTS,
        business_id,
    },
};

#[tracing::instrument(name = "customers.list", skip(state, user, query))]
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<CustomerQuery>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, ApiError> {
    let customers = state.services.customers.list(query).await?;
    let visible = authz::filter_by_role(&user, customers, |c| c.id);
    Ok(Json(ApiResponse::data(visible)))
}

#[tracing::instrument(name = "customers.get", skip(state, user), fields(%id))]
pub async fn get(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Customer>>, ApiError> {
    if !authz::can_access_customer(&user, id) {
        return Err(forbidden());
    }

    let customer = state
        .services
        .customers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))?;

    Ok(Json(ApiResponse::data(customer)))
}

#[tracing::instrument(name = "customers.create", skip(state, user, client_info, payload))]
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Json(payload): Json<CustomerPayload>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), ApiError> {
    if !authz::can_manage_customers(user.role) {
        return Err(forbidden());
    }

    let input = payload.validate_into().map_err(ApiError::Fields)?;

    let business_id = match payload.customer_id.as_deref() {
        Some(requested) => {
            if state.services.customers.business_id_exists(requested).await? {
                return Err(ApiError::Validation("Customer ID already exists".to_string()));
            }
            requested.to_string()
        }
        None => unique_customer_id(&state).await?,
    };

    let customer = state
        .services
        .customers
        .create(&business_id, input, user.user_id)
        .await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Create,
            EntityKind::Customer,
            customer.id,
            Some(json!({
                "customer_id": customer.customer_id,
                "customer_name": customer.customer_name,
            })),
            &client_info,
        )
        .await;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            customer,
            "Customer created successfully",
        )),
    ))
}

#[tracing::instrument(name = "customers.update", skip(state, user, client_info, payload), fields(%id))]
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerPayload>,
) -> Result<Json<ApiResponse<Customer>>, ApiError> {
    if !authz::can_manage_customers(user.role) {
        return Err(forbidden());
    }

    let input = payload.validate_into().map_err(ApiError::Fields)?;

    let existing = state
        .services
        .customers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))?;

    let updated = state.services.customers.update(id, input).await?;

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Update,
            EntityKind::Customer,
            id,
            Some(json!({ "before": existing, "after": updated })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::with_message(
        updated,
        "Customer updated successfully",
    )))
}

#[tracing::instrument(name = "customers.delete", skip(state, user, client_info), fields(%id))]
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Extension(client_info): Extension<ClientInfo>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !authz::can_manage_customers(user.role) {
        return Err(forbidden());
    }

    let existing = state
        .services
        .customers
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))?;

    if state.services.customers.active_case_count(id).await? > 0 {
        return Err(ApiError::Validation(
            "Cannot delete customer with active cases".to_string(),
        ));
    }

    if !state.services.customers.delete(id).await? {
        return Err(ApiError::NotFound("Customer not found".to_string()));
    }

    state
        .services
        .audit_logs
        .record(
            user.user_id,
            AuditAction::Delete,
            EntityKind::Customer,
            id,
            Some(json!({
                "customer_id": existing.customer_id,
                "customer_name": existing.customer_name,
            })),
            &client_info,
        )
        .await;

    Ok(Json(ApiResponse::message("Customer deleted successfully")))
}

/// Generate a business id, re-rolling on the rare collision.
async fn unique_customer_id(state: &AppState) -> Result<String, ApiError> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = business_id::customer_id();
        if !state
            .services
            .customers
            .business_id_exists(&candidate)
            .await?
        {
            return Ok(candidate);
        }
    }
    Err(ApiError::Internal(
        "Failed to generate a unique customer ID".to_string(),
    ))
}
