//! Notification dismissal repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{MemberId, SessionId};
use amoria_entity::notification::{Dismissal, NotificationKey};

/// Repository for durable notification dismissals.
///
/// Dismissals are keyed on `(kind, source_id, member_id, session_id)`, so
/// a dismissed notification stays gone for that session across process
/// restarts and re-fetches.
#[derive(Debug, Clone)]
pub struct DismissalRepository {
    pool: PgPool,
}

impl DismissalRepository {
    /// Create a new dismissal repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a dismissal. Re-dismissing the same key is a no-op.
    pub async fn upsert(
        &self,
        key: NotificationKey,
        member: MemberId,
        session: SessionId,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO notification_dismissals (kind, source_id, member_id, session_id) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (kind, source_id, member_id, session_id) DO NOTHING",
        )
        .bind(key.kind)
        .bind(key.source_id)
        .bind(member)
        .bind(session)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record dismissal", e)
        })?;
        Ok(())
    }

    /// All dismissals recorded for one member's session.
    pub async fn find_for_session(
        &self,
        member: MemberId,
        session: SessionId,
    ) -> AppResult<Vec<Dismissal>> {
        sqlx::query_as::<_, Dismissal>(
            "SELECT * FROM notification_dismissals \
             WHERE member_id = $1 AND session_id = $2",
        )
        .bind(member)
        .bind(session)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list dismissals", e)
        })
    }

    /// Dismissed source ids for one member's session, for feed filtering.
    pub async fn dismissed_source_ids(
        &self,
        member: MemberId,
        session: SessionId,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT source_id FROM notification_dismissals \
             WHERE member_id = $1 AND session_id = $2",
        )
        .bind(member)
        .bind(session)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list dismissed ids", e)
        })
    }

    /// Delete dismissals older than the retention cutoff. Returns deleted rows.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM notification_dismissals WHERE dismissed_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete old dismissals", e)
            })?;
        Ok(result.rows_affected())
    }
}
