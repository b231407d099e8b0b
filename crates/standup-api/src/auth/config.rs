// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config

use std::time::Duration;

const DEFAULT_JWT_SECRET: &str = "insecure-dev-secret-change-me";
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT signing configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for signing JWTs
    pub jwt_secret: String,
    /// Bearer token lifetime
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_SECS),
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("AUTH_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("AUTH_JWT_SECRET not set, using insecure default");
            DEFAULT_JWT_SECRET.to_string()
        });

        let token_ttl = std::env::var("AUTH_TOKEN_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_TOKEN_TTL_SECS));

        Self {
            jwt_secret,
            token_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl, Duration::from_secs(24 * 60 * 60));
        assert!(!config.jwt_secret.is_empty());
    }
}
