// Signup and login HTTP routes

use axum::{extract::State, routing::post, Json, Router};
use standup_contracts::{LoginRequest, MessageResponse, SignupRequest, TokenResponse};
use standup_storage::{hash_password, verify_password, CreateUser};

use crate::auth::AuthState;
use crate::error::ApiError;

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .with_state(state)
}

/// POST /auth/signup - Register a user and issue a token
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created, token issued", body = TokenResponse),
        (status = 400, description = "Missing or empty fields", body = MessageResponse),
        (status = 409, description = "Username already taken", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AuthState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (username, password) = validate_credentials(req.username, req.password)?;

    let password_hash = hash_password(&password)?;
    let user = state
        .db
        .create_user(CreateUser {
            username,
            password_hash,
        })
        .await?
        .ok_or_else(|| ApiError::Conflict("User already exists".to_string()))?;

    tracing::info!(user_id = %user.id, "user registered");

    let token = state.tokens.issue(user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// POST /auth/login - Verify credentials and issue a token
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted, token issued", body = TokenResponse),
        (status = 400, description = "Missing or empty fields", body = MessageResponse),
        (status = 401, description = "Unknown username or wrong password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let (username, password) = validate_credentials(req.username, req.password)?;

    // Unknown usernames and wrong passwords answer identically
    let invalid = || ApiError::Unauthenticated("Invalid credentials".to_string());

    let user = state
        .db
        .get_user_by_username(&username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password(&password, &user.password_hash)? {
        tracing::warn!(user_id = %user.id, "failed login attempt");
        return Err(invalid());
    }

    let token = state.tokens.issue(user.id)?;
    Ok(Json(TokenResponse { token }))
}

/// Both credential fields must be present and non-empty after trimming.
/// The username is stored and looked up trimmed; the password is kept as
/// sent.
fn validate_credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    match (username, password) {
        (Some(username), Some(password))
            if !username.trim().is_empty() && !password.trim().is_empty() =>
        {
            Ok((username.trim().to_string(), password))
        }
        _ => Err(ApiError::Validation("All fields are required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials_accepts_and_trims_username() {
        let (username, password) =
            validate_credentials(Some("  alice ".to_string()), Some("pw123".to_string())).unwrap();
        assert_eq!(username, "alice");
        assert_eq!(password, "pw123");
    }

    #[test]
    fn test_validate_credentials_rejects_missing_field() {
        assert!(matches!(
            validate_credentials(None, Some("pw123".to_string())),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_credentials(Some("alice".to_string()), None),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_credentials_rejects_blank_field() {
        assert!(matches!(
            validate_credentials(Some("".to_string()), Some("pw123".to_string())),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_credentials(Some("alice".to_string()), Some("   ".to_string())),
            Err(ApiError::Validation(_))
        ));
    }
}
