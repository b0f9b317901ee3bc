//! Profile view repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{MemberId, ProfileViewId};
use amoria_entity::profile_view::ProfileView;

/// A profile view row joined with the viewer's display name.
#[derive(Debug, Clone, FromRow)]
pub struct ViewWithViewer {
    /// The profile view row.
    #[sqlx(flatten)]
    pub record: ProfileView,
    /// Display name of the viewer.
    pub viewer_name: String,
}

/// Repository for profile views.
#[derive(Debug, Clone)]
pub struct ProfileViewRepository {
    pool: PgPool,
}

impl ProfileViewRepository {
    /// Create a new profile view repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Views of the member's profile they have not seen yet, newest first.
    pub async fn unseen_for(
        &self,
        member: MemberId,
        limit: i64,
    ) -> AppResult<Vec<ViewWithViewer>> {
        sqlx::query_as::<_, ViewWithViewer>(
            "SELECT v.*, w.display_name AS viewer_name \
             FROM profile_views v \
             JOIN members w ON w.id = v.viewer_id \
             WHERE v.viewed_id = $1 AND NOT v.is_seen \
             ORDER BY v.viewed_at DESC LIMIT $2",
        )
        .bind(member)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unseen profile views", e)
        })
    }

    /// Mark one view seen, guarded on the viewed member. Returns affected rows.
    pub async fn mark_seen(&self, id: ProfileViewId, viewed: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE profile_views SET is_seen = TRUE WHERE id = $1 AND viewed_id = $2",
        )
        .bind(id)
        .bind(viewed)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark profile view seen", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Mark every unseen view seen for the viewed member. Returns affected rows.
    pub async fn mark_all_seen_for(&self, member: MemberId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE profile_views SET is_seen = TRUE WHERE viewed_id = $1 AND NOT is_seen",
        )
        .bind(member)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark all views seen", e)
        })?;
        Ok(result.rows_affected())
    }

    /// Delete views older than the retention cutoff. Returns deleted rows.
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM profile_views WHERE viewed_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete old profile views", e)
            })?;
        Ok(result.rows_affected())
    }
}
