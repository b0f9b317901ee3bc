//! Photo repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;

/// Repository for photo moderation counters.
///
/// The notification backend only reads moderation state; uploads and
/// verdicts are written elsewhere.
#[derive(Debug, Clone)]
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    /// Create a new photo repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count photos still waiting for a moderation verdict.
    pub async fn count_pending(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM photos WHERE is_approved IS NULL")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count pending photos", e)
            })
    }

    /// Pending photo count together with the newest pending upload time.
    ///
    /// One query, so the count and the timestamp can never disagree.
    pub async fn pending_summary(&self) -> AppResult<(i64, Option<DateTime<Utc>>)> {
        sqlx::query_as(
            "SELECT COUNT(*), MAX(uploaded_at) FROM photos WHERE is_approved IS NULL",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to summarize pending photos", e)
        })
    }
}
