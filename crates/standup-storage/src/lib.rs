// Postgres storage layer with sqlx
//
// This crate provides the persistence behind the HTTP API:
// - user accounts with argon2 password hashes
// - standup log entries keyed by owner

pub mod models;
pub mod password;
pub mod repositories;

pub use models::*;
pub use password::{hash_password, verify_password};
pub use repositories::*;
