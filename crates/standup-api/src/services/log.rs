// Log entry service: field validation and ownership enforcement

use standup_contracts::{CreateLogRequest, LogEntry, UpdateLogRequest};
use standup_storage::{CreateLog, Database, LogRow, UpdateLog};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;

/// The user recorded on an entry at creation is the only one allowed to
/// read, update or delete it. Ownership equality is the sole access check.
pub struct LogService {
    db: Arc<Database>,
}

impl LogService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self, owner_id: Uuid) -> Result<Vec<LogEntry>, ApiError> {
        let rows = self.db.list_logs(owner_id).await?;
        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }

    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<LogEntry, ApiError> {
        let row = self.fetch_owned(owner_id, id).await?;
        Ok(Self::row_to_entry(row))
    }

    pub async fn create(
        &self,
        owner_id: Uuid,
        req: CreateLogRequest,
    ) -> Result<LogEntry, ApiError> {
        let (yesterday, today, blockers) =
            validate_entry_fields(req.yesterday, req.today, req.blockers)?;

        let row = self
            .db
            .create_log(CreateLog {
                owner_id,
                yesterday,
                today,
                blockers,
            })
            .await?;

        Ok(Self::row_to_entry(row))
    }

    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        req: UpdateLogRequest,
    ) -> Result<LogEntry, ApiError> {
        let (yesterday, today, blockers) =
            validate_entry_fields(req.yesterday, req.today, req.blockers)?;

        self.fetch_owned(owner_id, id).await?;

        // Read-then-write on a single row; concurrent writers resolve by
        // last write wins.
        let row = self
            .db
            .update_log(
                id,
                UpdateLog {
                    yesterday,
                    today,
                    blockers,
                },
            )
            .await?
            .ok_or(ApiError::NotFound("Log not found"))?;

        Ok(Self::row_to_entry(row))
    }

    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), ApiError> {
        self.fetch_owned(owner_id, id).await?;

        let deleted = self.db.delete_log(id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Log not found"));
        }
        Ok(())
    }

    /// Fetch an entry and check it belongs to the caller
    async fn fetch_owned(&self, owner_id: Uuid, id: Uuid) -> Result<LogRow, ApiError> {
        let row = self
            .db
            .get_log(id)
            .await?
            .ok_or(ApiError::NotFound("Log not found"))?;

        if row.owner_id != owner_id {
            return Err(ApiError::Forbidden);
        }

        Ok(row)
    }

    fn row_to_entry(row: LogRow) -> LogEntry {
        LogEntry {
            id: row.id,
            owner_id: row.owner_id,
            date: row.date,
            yesterday: row.yesterday,
            today: row.today,
            blockers: row.blockers,
        }
    }
}

/// All three text fields must be present and non-empty after trimming.
/// Accepted values are stored with their whitespace intact.
fn validate_entry_fields(
    yesterday: Option<String>,
    today: Option<String>,
    blockers: Option<String>,
) -> Result<(String, String, String), ApiError> {
    match (yesterday, today, blockers) {
        (Some(yesterday), Some(today), Some(blockers))
            if !yesterday.trim().is_empty()
                && !today.trim().is_empty()
                && !blockers.trim().is_empty() =>
        {
            Ok((yesterday, today, blockers))
        }
        _ => Err(ApiError::Validation("All fields are required".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_validate_entry_fields_accepts_complete_input() {
        let (yesterday, today, blockers) =
            validate_entry_fields(text("fixed bug"), text("write tests"), text("none")).unwrap();
        assert_eq!(yesterday, "fixed bug");
        assert_eq!(today, "write tests");
        assert_eq!(blockers, "none");
    }

    #[test]
    fn test_validate_entry_fields_keeps_whitespace() {
        let (yesterday, _, _) =
            validate_entry_fields(text("  fixed bug "), text("t"), text("b")).unwrap();
        assert_eq!(yesterday, "  fixed bug ");
    }

    #[test]
    fn test_validate_entry_fields_rejects_missing() {
        assert!(matches!(
            validate_entry_fields(None, text("t"), text("b")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_entry_fields(text("y"), None, text("b")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_entry_fields(text("y"), text("t"), None),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_entry_fields_rejects_blank() {
        assert!(matches!(
            validate_entry_fields(text(""), text("t"), text("b")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_entry_fields(text("y"), text("   "), text("b")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_entry_fields(text("y"), text("t"), text("\t\n")),
            Err(ApiError::Validation(_))
        ));
    }
}
