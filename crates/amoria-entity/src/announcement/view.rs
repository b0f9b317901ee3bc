//! Announcement view-tracking entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-(announcement, member, session) view and dismissal state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnnouncementView {
    /// The announcement in question.
    pub announcement_id: Uuid,
    /// The member who saw it.
    pub member_id: Uuid,
    /// The client session it was seen in.
    pub session_id: Uuid,
    /// How many times it was shown in this session.
    pub view_count: i32,
    /// Whether the member dismissed it in this session.
    pub dismissed: bool,
    /// First time it was shown.
    pub first_viewed_at: DateTime<Utc>,
    /// Most recent time it was shown.
    pub last_viewed_at: DateTime<Utc>,
}

