//! Announcement repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use amoria_core::error::{AppError, ErrorKind};
use amoria_core::result::AppResult;
use amoria_core::types::{AnnouncementId, MemberId, SessionId};
use amoria_entity::announcement::{Announcement, AnnouncementView};

/// Repository for announcements and their per-session view state.
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: PgPool,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an announcement by primary key.
    pub async fn find_by_id(&self, id: AnnouncementId) -> AppResult<Option<Announcement>> {
        sqlx::query_as::<_, Announcement>("SELECT * FROM announcements WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find announcement", e)
            })
    }

    /// Announcements whose display window contains `now`.
    ///
    /// Expiry is a read-time filter; expired rows simply stop matching.
    pub async fn active_window(&self, now: DateTime<Utc>) -> AppResult<Vec<Announcement>> {
        sqlx::query_as::<_, Announcement>(
            "SELECT * FROM announcements \
             WHERE starts_at <= $1 AND (ends_at IS NULL OR ends_at > $1) \
             ORDER BY priority DESC, created_at DESC",
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active announcements", e)
        })
    }

    /// View rows for one member, across all of their sessions.
    ///
    /// The caller needs every session's rows: the view cap sums over
    /// sessions while dismissals apply per session.
    pub async fn views_for_member(&self, member: MemberId) -> AppResult<Vec<AnnouncementView>> {
        sqlx::query_as::<_, AnnouncementView>(
            "SELECT * FROM announcement_views WHERE member_id = $1",
        )
        .bind(member)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list announcement views", e)
        })
    }

    /// Record one display of an announcement, incrementing the view count.
    pub async fn record_view(
        &self,
        id: AnnouncementId,
        member: MemberId,
        session: SessionId,
    ) -> AppResult<AnnouncementView> {
        sqlx::query_as::<_, AnnouncementView>(
            "INSERT INTO announcement_views \
                (announcement_id, member_id, session_id, view_count, dismissed, first_viewed_at, last_viewed_at) \
             VALUES ($1, $2, $3, 1, FALSE, NOW(), NOW()) \
             ON CONFLICT (announcement_id, member_id, session_id) DO UPDATE \
                SET view_count = announcement_views.view_count + 1, last_viewed_at = NOW() \
             RETURNING *",
        )
        .bind(id)
        .bind(member)
        .bind(session)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record announcement view", e)
        })
    }

    /// Mark an announcement dismissed for one member's session.
    pub async fn dismiss(
        &self,
        id: AnnouncementId,
        member: MemberId,
        session: SessionId,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO announcement_views \
                (announcement_id, member_id, session_id, view_count, dismissed, first_viewed_at, last_viewed_at) \
             VALUES ($1, $2, $3, 0, TRUE, NOW(), NOW()) \
             ON CONFLICT (announcement_id, member_id, session_id) DO UPDATE \
                SET dismissed = TRUE",
        )
        .bind(id)
        .bind(member)
        .bind(session)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to dismiss announcement", e)
        })?;
        Ok(())
    }
}
