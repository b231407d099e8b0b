// Common types shared across API endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message body used for simple confirmations and error responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Log deleted")]
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
