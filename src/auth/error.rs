use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header provided.
    MissingCredentials,

    /// Token failed signature or structural validation. Not distinguished
    /// from expiry in the response, to avoid leaking token state.
    InvalidToken,

    /// Token signature was valid but the token has expired.
    ExpiredToken,

    /// Login credentials did not match (generic, prevents enumeration).
    InvalidLogin,

    /// Internal error during authentication (e.g. signing failure).
    Internal(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AuthError::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            AuthError::InvalidToken | AuthError::ExpiredToken => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            AuthError::InvalidLogin => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            AuthError::Internal(msg) => {
                tracing::error!(error = %msg, "Authentication internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed")
            }
        };

        let body = json!({ "success": false, "error": message });
        (status, Json(body)).into_response()
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Authentication required"),
            AuthError::InvalidToken => write!(f, "Invalid authentication token"),
            AuthError::ExpiredToken => write!(f, "Authentication token has expired"),
            AuthError::InvalidLogin => write!(f, "Invalid email or password"),
            AuthError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}
