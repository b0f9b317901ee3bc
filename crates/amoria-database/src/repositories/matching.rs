//! Match repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{MatchId, MemberId};
use amoria_entity::matching::Match;

/// A match row joined with both members' display names.
#[derive(Debug, Clone, FromRow)]
pub struct MatchWithNames {
    /// The match row.
    #[sqlx(flatten)]
    pub record: Match,
    /// Display name of `member_a`.
    pub name_a: String,
    /// Display name of `member_b`.
    pub name_b: String,
}

const WITH_NAMES: &str = "SELECT m.*, ma.display_name AS name_a, mb.display_name AS name_b \
     FROM matches m \
     JOIN members ma ON ma.id = m.member_a \
     JOIN members mb ON mb.id = m.member_b";

/// Repository for mutual matches.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    pool: PgPool,
}

impl MatchRepository {
    /// Create a new match repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Newest matches platform-wide, most recent first.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<MatchWithNames>> {
        sqlx::query_as::<_, MatchWithNames>(&format!(
            "{WITH_NAMES} ORDER BY m.matched_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent matches", e)
        })
    }

    /// Matches the given member has not seen yet, newest first.
    pub async fn unseen_for(&self, member: MemberId, limit: i64) -> AppResult<Vec<MatchWithNames>> {
        sqlx::query_as::<_, MatchWithNames>(&format!(
            "{WITH_NAMES} \
             WHERE (m.member_a = $1 AND NOT m.seen_by_a) \
                OR (m.member_b = $1 AND NOT m.seen_by_b) \
             ORDER BY m.matched_at DESC LIMIT $2"
        ))
        .bind(member)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unseen matches", e)
        })
    }

    /// Count matches the given member has not seen yet.
    pub async fn count_unseen_for(&self, member: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM matches \
             WHERE (member_a = $1 AND NOT seen_by_a) \
                OR (member_b = $1 AND NOT seen_by_b)",
        )
        .bind(member)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unseen matches", e)
        })
    }

    /// Flip the caller's side of the seen flag. Returns affected rows.
    pub async fn mark_seen(&self, id: MatchId, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE matches SET \
                seen_by_a = CASE WHEN member_a = $2 THEN TRUE ELSE seen_by_a END, \
                seen_by_b = CASE WHEN member_b = $2 THEN TRUE ELSE seen_by_b END \
             WHERE id = $1 AND (member_a = $2 OR member_b = $2)",
        )
        .bind(id)
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark match seen", e))?;
        Ok(result.rows_affected())
    }

    /// Flip the caller's side of every unseen match. Returns affected rows.
    pub async fn mark_all_seen_for(&self, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE matches SET \
                seen_by_a = CASE WHEN member_a = $1 THEN TRUE ELSE seen_by_a END, \
                seen_by_b = CASE WHEN member_b = $1 THEN TRUE ELSE seen_by_b END \
             WHERE (member_a = $1 AND NOT seen_by_a) OR (member_b = $1 AND NOT seen_by_b)",
        )
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all matches seen", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Total matches ever formed.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM matches")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count matches", e))
    }

    /// Matches formed at or after the given instant.
    pub async fn count_since(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM matches WHERE matched_at >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count recent matches", e)
            })
    }
}
