//! Member-to-support message repository implementation.

use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::AdminMessageId;
use amoria_entity::support::AdminMessage;

/// A support message row joined with the author's display name.
#[derive(Debug, Clone, FromRow)]
pub struct AdminMessageWithMember {
    /// The support message row.
    #[sqlx(flatten)]
    pub record: AdminMessage,
    /// Display name of the member who wrote in.
    pub member_name: String,
}

/// Repository for messages members send to the support desk.
#[derive(Debug, Clone)]
pub struct AdminMessageRepository {
    pool: PgPool,
}

impl AdminMessageRepository {
    /// Create a new support message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Support messages no admin has seen yet, newest first.
    pub async fn unseen(&self, limit: i64) -> AppResult<Vec<AdminMessageWithMember>> {
        sqlx::query_as::<_, AdminMessageWithMember>(
            "SELECT am.*, m.display_name AS member_name \
             FROM admin_messages am \
             JOIN members m ON m.id = am.member_id \
             WHERE NOT am.is_seen \
             ORDER BY am.created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list support messages", e)
        })
    }

    /// Mark one support message seen. Returns affected rows.
    pub async fn mark_seen(&self, id: AdminMessageId) -> AppResult<u64> {
        let result = sqlx::query("UPDATE admin_messages SET is_seen = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark support message seen", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Mark every unseen support message seen. Returns affected rows.
    pub async fn mark_all_seen(&self) -> AppResult<u64> {
        let result = sqlx::query("UPDATE admin_messages SET is_seen = TRUE WHERE NOT is_seen")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to mark all support messages seen",
                    e,
                )
            })?;
        Ok(result.rows_affected())
    }
}
