// Authentication module
// Decision: Bearer JWTs in the Authorization header; no server-side session state

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::AuthConfig;
pub use jwt::TokenService;
pub use middleware::{require_auth, AuthState, AuthUser};
pub use routes::routes;
