//! Abuse report repository implementation.

use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::ReportId;
use amoria_entity::report::Report;

/// A report row joined with both members' display names.
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithNames {
    /// The report row.
    #[sqlx(flatten)]
    pub record: Report,
    /// Display name of the reporter.
    pub reporter_name: String,
    /// Display name of the reported member.
    pub reported_name: String,
}

/// Repository for abuse reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open reports no moderator has seen yet, newest first.
    pub async fn open_unseen(&self, limit: i64) -> AppResult<Vec<ReportWithNames>> {
        sqlx::query_as::<_, ReportWithNames>(
            "SELECT r.*, \
                    rp.display_name AS reporter_name, \
                    rd.display_name AS reported_name \
             FROM reports r \
             JOIN members rp ON rp.id = r.reporter_id \
             JOIN members rd ON rd.id = r.reported_id \
             WHERE r.status = 'open' AND NOT r.is_seen \
             ORDER BY r.created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list open reports", e)
        })
    }

    /// Count reports still open.
    pub async fn count_open(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE status = 'open'")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count open reports", e)
            })
    }

    /// Mark one report seen in the moderation feed. Returns affected rows.
    pub async fn mark_seen(&self, id: ReportId) -> AppResult<u64> {
        let result = sqlx::query("UPDATE reports SET is_seen = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark report seen", e)
            })?;
        Ok(result.rows_affected())
    }

    /// Mark every unseen report seen. Returns affected rows.
    pub async fn mark_all_seen(&self) -> AppResult<u64> {
        let result = sqlx::query("UPDATE reports SET is_seen = TRUE WHERE NOT is_seen")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark all reports seen", e)
            })?;
        Ok(result.rows_affected())
    }
}
