// API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use standup_contracts::MessageResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed validation.
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed or rejected credentials.
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated caller does not own the resource.
    #[error("access denied")]
    Forbidden,

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            // Ownership failures are indistinguishable from auth failures
            // on the wire; entry ids outside the caller's set stay opaque.
            ApiError::Forbidden => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.to_string()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(msg))).into_response()
    }
}
