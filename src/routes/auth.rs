//! Registration and login. These are the only unauthenticated API routes.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ApiError, ApiResponse};
use crate::{
    AppState,
    auth::{AuthError, password},
    models::{LoginRequest, NewUser, PublicUser, RegisterRequest, Role, validators},
};

/// Token plus password-free user, returned by both auth endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthData {
    pub user: PublicUser,
    pub token: String,
}

#[tracing::instrument(name = "auth.register", skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthData>>), ApiError> {
    if let Err(errors) = payload.validate() {
        let map = validators::field_errors_from(&errors);
        // Single-message responses, checked in a fixed order.
        for field in ["email", "password", "name"] {
            if let Some(message) = map.get(field) {
                return Err(ApiError::Validation(message.clone()));
            }
        }
    }

    let Some(role) = Role::parse(&payload.role) else {
        return Err(ApiError::Validation("Invalid role".to_string()));
    };

    let email = payload.email.trim().to_lowercase();
    if state.services.users.get_by_email(&email).await?.is_some() {
        return Err(ApiError::Validation("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = state
        .services
        .users
        .create(NewUser {
            email,
            name: payload.name.trim().to_string(),
            password_hash,
            role,
            customer_id: payload.customer_id,
        })
        .await?;

    let token = state.tokens.issue(&user)?;
    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            AuthData {
                user: PublicUser::from(&user),
                token,
            },
            "User registered successfully",
        )),
    ))
}

#[tracing::instrument(name = "auth.login", skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthData>>, ApiError> {
    if let Err(errors) = payload.validate() {
        let map = validators::field_errors_from(&errors);
        for field in ["email", "password"] {
            if let Some(message) = map.get(field) {
                return Err(ApiError::Validation(message.clone()));
            }
        }
    }

    let email = payload.email.trim().to_lowercase();
    let user = state
        .services
        .users
        .get_by_email(&email)
        .await?
        .ok_or(AuthError::InvalidLogin)?;

    // Unknown email and wrong password produce the same response.
    if !password::verify_password(&payload.password, &user.password_hash) {
        return Err(AuthError::InvalidLogin.into());
    }

    let token = state.tokens.issue(&user)?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(ApiResponse::with_message(
        AuthData {
            user: PublicUser::from(&user),
            token,
        },
        "Login successful",
    )))
}
