// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Run embedded migrations
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a new user. Returns None when the username is already taken.
    pub async fn create_user(&self, input: CreateUser) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.username)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await;

        match row {
            Ok(row) => Ok(Some(row)),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Log entries
    // ============================================

    pub async fn create_log(&self, input: CreateLog) -> Result<LogRow> {
        let row = sqlx::query_as::<_, LogRow>(
            r#"
            INSERT INTO logs (id, owner_id, yesterday, today, blockers)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, owner_id, date, yesterday, today, blockers
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(input.owner_id)
        .bind(&input.yesterday)
        .bind(&input.today)
        .bind(&input.blockers)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_log(&self, id: Uuid) -> Result<Option<LogRow>> {
        let row = sqlx::query_as::<_, LogRow>(
            r#"
            SELECT id, owner_id, date, yesterday, today, blockers
            FROM logs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// List one owner's entries, most recent first. Ids are time-ordered
    /// (UUID v7), so the id tie-break keeps entries with equal timestamps
    /// in insertion order.
    pub async fn list_logs(&self, owner_id: Uuid) -> Result<Vec<LogRow>> {
        let rows = sqlx::query_as::<_, LogRow>(
            r#"
            SELECT id, owner_id, date, yesterday, today, blockers
            FROM logs
            WHERE owner_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_log(&self, id: Uuid, input: UpdateLog) -> Result<Option<LogRow>> {
        let row = sqlx::query_as::<_, LogRow>(
            r#"
            UPDATE logs
            SET
                yesterday = $2,
                today = $3,
                blockers = $4
            WHERE id = $1
            RETURNING id, owner_id, date, yesterday, today, blockers
            "#,
        )
        .bind(id)
        .bind(&input.yesterday)
        .bind(&input.today)
        .bind(&input.blockers)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn delete_log(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
