//! Direct message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A direct message between two matched members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Sending member.
    pub sender_id: Uuid,
    /// Receiving member.
    pub recipient_id: Uuid,
    /// Message body text.
    pub body: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
    /// Whether the recipient has read the message.
    pub is_read: bool,
}

impl Message {
    /// Unread messages count toward the recipient's badge.
    pub fn is_unread_for(&self, member: Uuid) -> bool {
        self.recipient_id == member && !self.is_read
    }
}
