// Log entry DTOs for public API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A daily standup log entry.
/// `date` is fixed at creation; `owner_id` never changes for the life of
/// the entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    pub id: Uuid,
    #[serde(rename = "ownerId")]
    pub owner_id: Uuid,
    pub date: DateTime<Utc>,
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

/// Request to create a log entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLogRequest {
    #[serde(default)]
    #[schema(example = "fixed bug")]
    pub yesterday: Option<String>,
    #[serde(default)]
    #[schema(example = "write tests")]
    pub today: Option<String>,
    #[serde(default)]
    #[schema(example = "none")]
    pub blockers: Option<String>,
}

/// Request to update a log entry. All three text fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLogRequest {
    #[serde(default)]
    pub yesterday: Option<String>,
    #[serde(default)]
    pub today: Option<String>,
    #[serde(default)]
    pub blockers: Option<String>,
}
