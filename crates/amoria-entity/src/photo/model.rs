//! Photo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An uploaded profile photo.
///
/// The moderation verdict is tri-state: `None` means the photo is still
/// waiting for review, which is what the dashboard's pending-photo alert
/// counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Owning member.
    pub member_id: Uuid,
    /// When the photo was uploaded.
    pub uploaded_at: DateTime<Utc>,
    /// Moderation verdict; `None` while pending review.
    pub is_approved: Option<bool>,
}

impl Photo {
    /// Whether the photo still awaits moderation.
    pub fn is_pending(&self) -> bool {
        self.is_approved.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_tri_state() {
        let mut photo = Photo {
            id: Uuid::new_v4(),
            member_id: Uuid::new_v4(),
            uploaded_at: Utc::now(),
            is_approved: None,
        };
        assert!(photo.is_pending());

        photo.is_approved = Some(false);
        assert!(!photo.is_pending());

        photo.is_approved = Some(true);
        assert!(!photo.is_pending());
    }
}
