//! Announcement entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audience::AnnouncementAudience;

/// A site-wide announcement shown to eligible members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Unique announcement identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Free-form label ("info", "maintenance", ...), used for styling.
    pub kind: String,
    /// Which roles see the announcement.
    pub audience: AnnouncementAudience,
    /// Higher priority sorts first.
    pub priority: i32,
    /// Start of the display window.
    pub starts_at: DateTime<Utc>,
    /// End of the display window; `None` means open-ended.
    pub ends_at: Option<DateTime<Utc>>,
    /// Per-session view cap; `None` means unlimited.
    pub max_views: Option<i32>,
    /// Whether members may dismiss it.
    pub dismissible: bool,
    /// Admin who created it.
    pub created_by: Option<Uuid>,
    /// When the announcement was created.
    pub created_at: DateTime<Utc>,
    /// When the announcement was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    /// Whether the display window contains the given instant.
    ///
    /// Expiry is evaluated here, at read time; nothing sweeps expired
    /// announcements in the background.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        if self.starts_at > now {
            return false;
        }
        match self.ends_at {
            Some(ends_at) => ends_at > now,
            None => true,
        }
    }

    /// Whether a member's total view count has used up the cap.
    ///
    /// The cap is per member, summed over all of their sessions. No cap
    /// means unlimited redisplay.
    pub fn view_cap_reached(&self, total_views: i32) -> bool {
        match self.max_views {
            Some(max) => total_views >= max,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(starts: DateTime<Utc>, ends: Option<DateTime<Utc>>) -> Announcement {
        Announcement {
            id: Uuid::new_v4(),
            title: "Maintenance".to_string(),
            body: "Down at midnight".to_string(),
            kind: "maintenance".to_string(),
            audience: AnnouncementAudience::All,
            priority: 0,
            starts_at: starts,
            ends_at: ends,
            max_views: None,
            dismissible: true,
            created_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_window_bounds() {
        let now = Utc::now();
        let hour = Duration::hours(1);

        assert!(sample(now - hour, Some(now + hour)).is_active_at(now));
        assert!(!sample(now + hour, None).is_active_at(now));
        assert!(!sample(now - hour, Some(now - Duration::minutes(1))).is_active_at(now));
        assert!(sample(now - hour, None).is_active_at(now));
    }

    #[test]
    fn test_exact_end_is_expired() {
        let now = Utc::now();
        let a = sample(now - Duration::hours(1), Some(now));
        assert!(!a.is_active_at(now));
    }

    #[test]
    fn test_view_cap_only_with_max_views() {
        let now = Utc::now();
        let mut a = sample(now - Duration::hours(1), None);
        assert!(!a.view_cap_reached(100));

        a.max_views = Some(3);
        assert!(!a.view_cap_reached(2));
        assert!(a.view_cap_reached(3));
    }
}
