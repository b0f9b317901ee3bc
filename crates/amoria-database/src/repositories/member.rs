//! Member repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::MemberId;
use amoria_entity::member::Member;

/// Repository for member lookups and counters.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a member by primary key.
    pub async fn find_by_id(&self, id: MemberId) -> AppResult<Option<Member>> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find member by id", e)
            })
    }

    /// Newest registrations, most recent first.
    pub async fn recent(&self, limit: i64) -> AppResult<Vec<Member>> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent members", e)
        })
    }

    /// Total number of registered members.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM members")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count members", e))
    }

    /// Members who registered at or after the given instant.
    pub async fn count_created_since(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE created_at >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count new members", e)
            })
    }

    /// Members whose last activity is at or after the given instant.
    pub async fn count_active_since(&self, cutoff: DateTime<Utc>) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE last_active_at >= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count active members", e)
            })
    }
}
