//! Favorite repository implementation.

use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{FavoriteId, MemberId};
use amoria_entity::favorite::Favorite;

/// A favorite row joined with the acting member's display name.
#[derive(Debug, Clone, FromRow)]
pub struct FavoriteWithActor {
    /// The favorite row.
    #[sqlx(flatten)]
    pub record: Favorite,
    /// Display name of the member who favorited.
    pub actor_name: String,
}

/// Repository for favorites ("likes").
#[derive(Debug, Clone)]
pub struct FavoriteRepository {
    pool: PgPool,
}

impl FavoriteRepository {
    /// Create a new favorite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Favorites the given member has not seen yet, newest first.
    pub async fn unseen_for(
        &self,
        member: MemberId,
        limit: i64,
    ) -> AppResult<Vec<FavoriteWithActor>> {
        sqlx::query_as::<_, FavoriteWithActor>(
            "SELECT f.*, a.display_name AS actor_name \
             FROM favorites f \
             JOIN members a ON a.id = f.member_id \
             WHERE f.target_id = $1 AND NOT f.is_seen \
             ORDER BY f.created_at DESC LIMIT $2",
        )
        .bind(member)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unseen favorites", e)
        })
    }

    /// Count favorites the given member has not seen yet.
    pub async fn count_unseen_for(&self, member: MemberId) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM favorites WHERE target_id = $1 AND NOT is_seen",
        )
        .bind(member)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count unseen favorites", e)
        })
    }

    /// Mark one favorite seen, guarded on the target. Returns affected rows.
    pub async fn mark_seen(&self, id: FavoriteId, target: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE favorites SET is_seen = TRUE WHERE id = $1 AND target_id = $2",
        )
        .bind(id)
        .bind(target)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark favorite seen", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Mark every unseen favorite seen for the target. Returns affected rows.
    pub async fn mark_all_seen_for(&self, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE favorites SET is_seen = TRUE WHERE target_id = $1 AND NOT is_seen",
        )
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all favorites seen", e)
        })?;
        Ok(result.rows_affected())
    }
}
