// Auth DTOs for public API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create an account.
/// Fields are validated at the boundary; absent and empty values are
/// rejected the same way.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(example = "pw123")]
    pub password: Option<String>,
}

/// Request to log in with existing credentials
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[serde(default)]
    #[schema(example = "pw123")]
    pub password: Option<String>,
}

/// Bearer token issued on successful signup or login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
