// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// User models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}

// ============================================
// Log entry models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct LogRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub date: DateTime<Utc>,
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

#[derive(Debug, Clone)]
pub struct CreateLog {
    pub owner_id: Uuid,
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}

/// Full overwrite of the three text fields. The id, owner and date of an
/// entry never change after creation.
#[derive(Debug, Clone)]
pub struct UpdateLog {
    pub yesterday: String,
    pub today: String,
    pub blockers: String,
}
