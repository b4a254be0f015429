//! Bearer-token authentication middleware.
//!
//! Applied via `route_layer` to every protected router, making it the single
//! enforcement point: a handler behind it cannot run without a verified
//! token. On success the verified identity and client metadata are attached
//! to request extensions; on any failure the request short-circuits with 401
//! and the handler is never invoked.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::HeaderMap;

use super::ClientInfo;
use crate::{
    AppState,
    auth::{AuthError, CurrentUser},
};

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())?;
    let claims = state.tokens.verify(token)?;

    let client_info = ClientInfo::from_headers(request.headers());
    request.extensions_mut().insert(CurrentUser::from(claims));
    request.extensions_mut().insert(client_info);

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// Absent or malformed headers are rejected before verification.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredentials)?;

    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(token)
}
