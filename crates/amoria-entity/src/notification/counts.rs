//! Badge count summary.

use serde::{Deserialize, Serialize};

/// Per-category unread/unseen counts backing the client badges.
///
/// Counts are derived from the domain tables at read time; nothing ever
/// increments or decrements a stored counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCounts {
    /// Unseen mutual matches.
    pub matches: i64,
    /// Unread direct messages.
    pub messages: i64,
    /// Unseen favorites.
    pub favorites: i64,
    /// Pending, unseen match requests.
    pub match_requests: i64,
}

impl NotificationCounts {
    /// Sum across all categories.
    pub fn total(&self) -> i64 {
        self.matches + self.messages + self.favorites + self.match_requests
    }

    /// Whether every badge is zero.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
