//! Profile view entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A record of one member viewing another's profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileView {
    /// Unique view identifier.
    pub id: Uuid,
    /// Member who looked.
    pub viewer_id: Uuid,
    /// Member whose profile was viewed.
    pub viewed_id: Uuid,
    /// When the view happened.
    pub viewed_at: DateTime<Utc>,
    /// Whether the viewed member has seen this visit.
    pub is_seen: bool,
}
