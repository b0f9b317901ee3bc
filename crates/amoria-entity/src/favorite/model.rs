//! Favorite entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A "like": one member favoriting another's profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Favorite {
    /// Unique favorite identifier.
    pub id: Uuid,
    /// Member who favorited.
    pub member_id: Uuid,
    /// Member whose profile was favorited.
    pub target_id: Uuid,
    /// When the favorite was created.
    pub created_at: DateTime<Utc>,
    /// Whether the target has seen this favorite.
    pub is_seen: bool,
}
