//! Message repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{MemberId, MessageId};
use amoria_entity::message::Message;

/// A message row joined with the sender's display name.
#[derive(Debug, Clone, FromRow)]
pub struct MessageWithSender {
    /// The message row.
    #[sqlx(flatten)]
    pub record: Message,
    /// Display name of the sender.
    pub sender_name: String,
}

const WITH_SENDER: &str = "SELECT msg.*, s.display_name AS sender_name \
     FROM messages msg \
     JOIN members s ON s.id = msg.sender_id";

/// Repository for direct messages.
#[derive(Debug, Clone)]
pub struct MessageRepository {
    pool: PgPool,
}

impl MessageRepository {
    /// Create a new message repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest messages platform-wide, most recent first.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<MessageWithSender>> {
        sqlx::query_as::<_, MessageWithSender>(&format!(
            "{WITH_SENDER} ORDER BY msg.sent_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent messages", e)
        })
    }

    /// Unread messages for the given recipient, newest first.
    pub async fn unread_for(
        &self,
        member: MemberId,
        limit: i64,
    ) -> AppResult<Vec<MessageWithSender>> {
        sqlx::query_as::<_, MessageWithSender>(&format!(
            "{WITH_SENDER} \
             WHERE msg.recipient_id = $1 AND NOT msg.is_read \
             ORDER BY msg.sent_at DESC LIMIT $2"
        ))
        .bind(member)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unread messages", e)
        })
    }

    /// Count unread messages for the given recipient.
    pub async fn count_unread_for(&self, member: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(member)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unread messages", e)
        })
    }

    /// Mark one message read, guarded on the recipient. Returns affected rows.
    pub async fn mark_read(&self, id: MessageId, recipient: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE WHERE id = $1 AND recipient_id = $2",
        )
        .bind(id)
        .bind(recipient)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark message read", e))?;
        Ok(result.rows_affected())
    }

    /// Mark every unread message read for the recipient. Returns affected rows.
    pub async fn mark_all_read_for(&self, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE messages SET is_read = TRUE WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all messages read", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Total messages ever sent.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count messages", e))
    }

    /// Messages sent at or after the given instant.
    pub async fn count_since(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE sent_at >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count recent messages", e)
            })
    }
}
