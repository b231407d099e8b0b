// Public contracts for the Standup API
// This crate defines the request/response DTOs shared by the HTTP surface

pub mod auth;
pub mod common;
pub mod log;

pub use auth::*;
pub use common::*;
pub use log::*;
