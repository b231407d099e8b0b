// JWT issuing and verification

use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthConfig;

/// Claims carried in a bearer token. `sub` holds the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies bearer tokens with a shared HS256 secret.
/// Verification needs no database access, so any instance can check a
/// token another instance issued.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_secs: config.token_ttl.as_secs() as i64,
        }
    }

    /// Issue a token for the given user
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .context("Failed to sign token")
    }

    /// Verify signature and expiry, returning the user id from `sub`
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &Validation::default())
                .context("Invalid token")?;
        data.claims.sub.parse().context("Invalid token subject")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::default())
    }

    fn craft(claims: &Claims, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = service();
        let user_id = Uuid::now_v7();
        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_wrong_secret_fails() {
        let tokens = service();
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..AuthConfig::default()
        });
        let token = other.issue(Uuid::now_v7()).unwrap();
        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = AuthConfig::default();
        let now = chrono::Utc::now().timestamp();
        // Expired well past the decoder's clock-skew leeway
        let claims = Claims {
            sub: Uuid::now_v7().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = craft(&claims, &config.jwt_secret);
        assert!(TokenService::new(&config).verify(&token).is_err());
    }

    #[test]
    fn test_garbage_tokens_fail() {
        let tokens = service();
        assert!(tokens.verify("").is_err());
        assert!(tokens.verify("not-a-jwt").is_err());
        assert!(tokens.verify("a.b.c").is_err());
    }

    #[test]
    fn test_non_uuid_subject_fails() {
        let config = AuthConfig::default();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = craft(&claims, &config.jwt_secret);
        assert!(TokenService::new(&config).verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_fails() {
        let tokens = service();
        let token_a = tokens.issue(Uuid::now_v7()).unwrap();
        let token_b = tokens.issue(Uuid::now_v7()).unwrap();

        // Payload of one token with the signature of another
        let (head_a, _) = token_a.rsplit_once('.').unwrap();
        let (_, sig_b) = token_b.rsplit_once('.').unwrap();
        let tampered = format!("{}.{}", head_a, sig_b);

        assert!(tokens.verify(&tampered).is_err());
    }
}
