// Log entry CRUD HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use standup_contracts::{CreateLogRequest, LogEntry, MessageResponse, UpdateLogRequest};
use standup_storage::Database;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::LogService;

/// App state for log routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LogService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(LogService::new(db)),
        }
    }
}

/// Create log routes. The caller wraps these in the auth middleware.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/logs", post(create_log).get(list_logs))
        .route(
            "/logs/{log_id}",
            get(get_log).put(update_log).delete(delete_log),
        )
        .with_state(state)
}

/// GET /logs - List the caller's entries, most recent first
#[utoipa::path(
    get,
    path = "/logs",
    responses(
        (status = 200, description = "The caller's log entries", body = [LogEntry]),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "logs"
)]
pub async fn list_logs(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let entries = state.service.list(owner_id).await?;
    Ok(Json(entries))
}

/// GET /logs/{log_id} - Get one of the caller's entries
#[utoipa::path(
    get,
    path = "/logs/{log_id}",
    params(
        ("log_id" = String, Path, description = "Log entry id")
    ),
    responses(
        (status = 200, description = "Log entry", body = LogEntry),
        (status = 401, description = "Missing or invalid token, or not the owner", body = MessageResponse),
        (status = 404, description = "No such entry", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "logs"
)]
pub async fn get_log(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Path(log_id): Path<String>,
) -> Result<Json<LogEntry>, ApiError> {
    let id = parse_log_id(&log_id)?;
    let entry = state.service.get(owner_id, id).await?;
    Ok(Json(entry))
}

/// POST /logs - Create an entry owned by the caller
#[utoipa::path(
    post,
    path = "/logs",
    request_body = CreateLogRequest,
    responses(
        (status = 201, description = "Entry created", body = LogEntry),
        (status = 400, description = "Missing or empty fields", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "logs"
)]
pub async fn create_log(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Json(req): Json<CreateLogRequest>,
) -> Result<(StatusCode, Json<LogEntry>), ApiError> {
    let entry = state.service.create(owner_id, req).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /logs/{log_id} - Replace the text fields of one of the caller's entries
#[utoipa::path(
    put,
    path = "/logs/{log_id}",
    params(
        ("log_id" = String, Path, description = "Log entry id")
    ),
    request_body = UpdateLogRequest,
    responses(
        (status = 200, description = "Updated entry", body = LogEntry),
        (status = 400, description = "Missing or empty fields", body = MessageResponse),
        (status = 401, description = "Missing or invalid token, or not the owner", body = MessageResponse),
        (status = 404, description = "No such entry", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "logs"
)]
pub async fn update_log(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Path(log_id): Path<String>,
    Json(req): Json<UpdateLogRequest>,
) -> Result<Json<LogEntry>, ApiError> {
    let id = parse_log_id(&log_id)?;
    let entry = state.service.update(owner_id, id, req).await?;
    Ok(Json(entry))
}

/// DELETE /logs/{log_id} - Delete one of the caller's entries
#[utoipa::path(
    delete,
    path = "/logs/{log_id}",
    params(
        ("log_id" = String, Path, description = "Log entry id")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token, or not the owner", body = MessageResponse),
        (status = 404, description = "No such entry", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "logs"
)]
pub async fn delete_log(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Path(log_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_log_id(&log_id)?;
    state.service.delete(owner_id, id).await?;
    Ok(Json(MessageResponse::new("Log deleted")))
}

/// Parse a path id. Anything that does not parse as a UUID cannot name a
/// stored entry, so it answers the same as an unknown id.
fn parse_log_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse().map_err(|_| ApiError::NotFound("Log not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_id_accepts_uuid() {
        let id = Uuid::now_v7();
        assert_eq!(parse_log_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_log_id_maps_malformed_to_not_found() {
        for raw in ["abc", "123", "not-a-uuid", ""] {
            assert!(
                matches!(parse_log_id(raw), Err(ApiError::NotFound(_))),
                "id {:?}",
                raw
            );
        }
    }
}
