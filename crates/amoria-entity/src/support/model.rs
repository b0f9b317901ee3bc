//! Member-to-support message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A message a member sent to the support desk.
///
/// These surface in admin notification feeds until an admin marks them seen.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminMessage {
    /// Unique message identifier.
    pub id: Uuid,
    /// Member who wrote to support.
    pub member_id: Uuid,
    /// Message body text.
    pub body: String,
    /// When the message arrived.
    pub created_at: DateTime<Utc>,
    /// Whether an admin has seen the message.
    pub is_seen: bool,
}
