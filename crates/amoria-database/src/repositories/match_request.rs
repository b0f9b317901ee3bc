//! Match request repository implementation.

use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{MatchRequestId, MemberId};
use amoria_entity::matching::MatchRequest;

/// A match request row joined with the requester's display name.
#[derive(Debug, Clone, FromRow)]
pub struct RequestWithRequester {
    /// The match request row.
    #[sqlx(flatten)]
    pub record: MatchRequest,
    /// Display name of the requester.
    pub requester_name: String,
}

/// Repository for match requests.
#[derive(Debug, Clone)]
pub struct MatchRequestRepository {
    pool: PgPool,
}

impl MatchRequestRepository {
    /// Create a new match request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pending requests the target has not seen yet, newest first.
    pub async fn pending_unseen_for(
        &self,
        member: MemberId,
        limit: i64,
    ) -> AppResult<Vec<RequestWithRequester>> {
        sqlx::query_as::<_, RequestWithRequester>(
            "SELECT r.*, q.display_name AS requester_name \
             FROM match_requests r \
             JOIN members q ON q.id = r.requester_id \
             WHERE r.target_id = $1 AND r.status = 'pending' AND NOT r.is_seen \
             ORDER BY r.created_at DESC LIMIT $2",
        )
        .bind(member)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pending requests", e)
        })
    }

    /// Count pending requests the target has not seen yet.
    pub async fn count_pending_unseen_for(&self, member: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM match_requests \
             WHERE target_id = $1 AND status = 'pending' AND NOT is_seen",
        )
        .bind(member)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count pending requests", e)
        })
    }

    /// Mark one request seen, guarded on the target. Returns affected rows.
    pub async fn mark_seen(&self, id: MatchRequestId, target: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE match_requests SET is_seen = TRUE WHERE id = $1 AND target_id = $2",
        )
        .bind(id)
        .bind(target)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark request seen", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Mark every unseen request seen for the target. Returns affected rows.
    pub async fn mark_all_seen_for(&self, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE match_requests SET is_seen = TRUE WHERE target_id = $1 AND NOT is_seen",
        )
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all requests seen", e)
        })?;
        Ok(result.rows_affected())
    }
}
