use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{auth::AuthError, db::DbError, models::validators::FieldErrors};

/// Handler-level error, rendered into the uniform envelope.
///
/// Every handler catches its own failures and converts them here; there is
/// no global error-translation layer beyond the authenticator.
#[derive(Debug)]
pub enum ApiError {
    /// Referenced resource does not exist (404).
    NotFound(String),
    /// Single-message validation or business-rule failure (400).
    Validation(String),
    /// Per-field validation failures (400, `errors` map in the body).
    Fields(FieldErrors),
    /// Authentication failure outside the middleware, e.g. bad login (401).
    Unauthorized(String),
    /// Caller's role is not permitted (403).
    Forbidden(String),
    /// Underlying store failure; detail is logged, not leaked (500).
    Database(DbError),
    /// Anything else unexpected; detail is logged, not leaked (500).
    Internal(String),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            DbError::Conflict(msg) => ApiError::Validation(msg),
            _ => ApiError::Database(err),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidLogin => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::MissingCredentials
            | AuthError::InvalidToken
            | AuthError::ExpiredToken => {
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Field maps use the `errors` key; everything else uses `error`.
        if let ApiError::Fields(fields) = self {
            let body = json!({ "success": false, "errors": fields });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Fields(_) => unreachable!("Handled above"),
        };

        let body = json!({ "success": false, "error": message });
        (status, Json(body)).into_response()
    }
}

/// Standard message for role-denied requests.
pub fn forbidden() -> ApiError {
    ApiError::Forbidden("Insufficient permissions".to_string())
}
