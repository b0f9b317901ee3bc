//! Published feed state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use amoria_entity::notification::Notification;

/// The visible notification feed for one session at a point in time.
///
/// Items the session auto-dismissed or explicitly dismissed are already
/// filtered out. `refreshed_at` stays `None` until the first fetch lands;
/// a failed poll leaves the previous snapshot in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// Visible notifications, newest first.
    pub notifications: Vec<Notification>,
    /// How many visible notifications are unread.
    pub unread: usize,
    /// When the feed was last fetched successfully.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl FeedSnapshot {
    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
