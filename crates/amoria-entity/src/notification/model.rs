//! Assembled notification model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::key::NotificationKey;
use super::kind::{NavigationTarget, NotificationKind};

/// A notification as presented to a client.
///
/// Assembled at read time from a domain row; never stored. The `key` and
/// `kind` fields always agree because construction goes through
/// [`Notification::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Stable derived identity, rendered `"{kind}-{uuid}"`.
    #[serde(rename = "id")]
    pub key: NotificationKey,
    /// The notification kind.
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Member whose action produced the notification, if any.
    pub actor_id: Option<Uuid>,
    /// Display name of the actor, denormalized at assembly time.
    pub actor_name: Option<String>,
    /// When the underlying event happened.
    pub timestamp: DateTime<Utc>,
    /// Whether the recipient has read it.
    pub read: bool,
}

impl Notification {
    /// Assemble a notification from a domain row.
    pub fn new(
        kind: NotificationKind,
        source_id: Uuid,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
        read: bool,
    ) -> Self {
        Self {
            key: NotificationKey::new(kind, source_id),
            kind,
            title: title.into(),
            message: message.into(),
            actor_id: None,
            actor_name: None,
            timestamp,
            read,
        }
    }

    /// Attach the acting member.
    pub fn with_actor(mut self, actor_id: Uuid, actor_name: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id);
        self.actor_name = Some(actor_name.into());
        self
    }

    /// Where a client should navigate when this notification is opened.
    pub fn navigation_target(&self) -> NavigationTarget {
        self.kind.navigation_target()
    }

    /// Icon name for rendering.
    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }

    /// Accent color for rendering.
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_and_kind_agree() {
        let id = Uuid::new_v4();
        let n = Notification::new(
            NotificationKind::Match,
            id,
            "It's a match!",
            "You and Aiko liked each other",
            Utc::now(),
            false,
        );
        assert_eq!(n.key.kind, n.kind);
        assert_eq!(n.key.source_id, id);
    }

    #[test]
    fn test_wire_field_names() {
        let n = Notification::new(
            NotificationKind::Like,
            Uuid::new_v4(),
            "New like",
            "Someone likes you",
            Utc::now(),
            false,
        );
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["id"], serde_json::json!(n.key.to_string()));
        assert_eq!(json["type"], serde_json::json!("like"));
    }
}
