//! Announcement delivery service.

use std::sync::Arc;

use amoria_core::error::AppError;
use amoria_core::result::AppResult;
use amoria_core::types::AnnouncementId;
use amoria_database::repositories::AnnouncementRepository;
use amoria_entity::announcement::{Announcement, AnnouncementView};

use crate::context::RequestContext;

use super::eligibility;

/// Decides which announcements a member sees and tracks their view state.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    announcements: Arc<AnnouncementRepository>,
}

impl AnnouncementService {
    /// Create a new announcement service.
    pub fn new(announcements: Arc<AnnouncementRepository>) -> Self {
        Self { announcements }
    }

    /// Announcements the caller should currently see, highest priority first.
    pub async fn active_for(&self, ctx: &RequestContext) -> AppResult<Vec<Announcement>> {
        let now = ctx.request_time;
        let (candidates, views) = tokio::try_join!(
            self.announcements.active_window(now),
            self.announcements.views_for_member(ctx.member_id),
        )?;

        let states = eligibility::summarize(views, ctx.session_id.into_uuid());

        Ok(candidates
            .into_iter()
            .filter(|a| eligibility::eligible(a, states.get(&a.id), ctx.role, now))
            .collect())
    }

    /// Record one display of an announcement for the caller's session.
    ///
    /// Increments the session's view count; once the member's total across
    /// sessions reaches the announcement's `max_views` it stops being
    /// served to them.
    pub async fn record_view(
        &self,
        ctx: &RequestContext,
        id: AnnouncementId,
    ) -> AppResult<AnnouncementView> {
        self.announcements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        self.announcements
            .record_view(id, ctx.member_id, ctx.session_id)
            .await
    }

    /// Dismiss an announcement for the caller's session. Idempotent.
    ///
    /// Dismissing a non-dismissible announcement succeeds without writing
    /// anything; the announcement simply keeps showing.
    pub async fn dismiss(&self, ctx: &RequestContext, id: AnnouncementId) -> AppResult<()> {
        let announcement = self
            .announcements
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Announcement not found"))?;
        if !announcement.dismissible {
            return Ok(());
        }
        self.announcements
            .dismiss(id, ctx.member_id, ctx.session_id)
            .await
    }
}
