// Bearer token middleware for protected routes

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};
use standup_storage::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{AuthConfig, TokenService};
use crate::error::ApiError;

/// Shared auth state: the token service plus the user store
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub db: Arc<Database>,
}

impl AuthState {
    pub fn new(config: AuthConfig, db: Arc<Database>) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(&config)),
            db,
        }
    }
}

/// Authenticated caller, inserted into request extensions by `require_auth`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Reject any request that does not carry a valid bearer token.
/// Verification is local to this request; no session is looked up.
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = bearer_token(header_value)
        .ok_or_else(|| ApiError::Unauthenticated("No token, authorization denied".to_string()))?;

    let user_id = state
        .tokens
        .verify(token)
        .map_err(|_| ApiError::Unauthenticated("Token is not valid".to_string()))?;

    request.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header.
/// The scheme is case-sensitive.
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token)
}
