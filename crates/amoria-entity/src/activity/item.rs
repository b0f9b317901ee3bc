//! Activity feed item model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::kind::ActivityKind;

/// One row of the admin dashboard's recent-activity feed.
///
/// The id is `"{kind}-{source_record_id}"`, which keeps ids unique after
/// items from different sources are merged into one list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Unique id within the merged feed.
    pub id: String,
    /// Event kind.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Short headline.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// Icon name, derived from the kind.
    pub icon: String,
    /// Accent color, derived from the kind.
    pub color: String,
}

impl ActivityItem {
    /// Build an item, deriving the id and presentation from the kind.
    pub fn new(
        kind: ActivityKind,
        source_id: impl std::fmt::Display,
        title: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{}-{}", kind.as_str(), source_id),
            kind,
            title: title.into(),
            description: description.into(),
            timestamp,
            icon: kind.icon().to_string(),
            color: kind.color().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_id_prefixed_with_kind() {
        let id = Uuid::new_v4();
        let item = ActivityItem::new(
            ActivityKind::NewMatch,
            id,
            "New match",
            "Aiko and Kenji matched",
            Utc::now(),
        );
        assert_eq!(item.id, format!("new_match-{id}"));
        assert_eq!(item.icon, "sparkles");
    }

    #[test]
    fn test_wire_type_field() {
        let item = ActivityItem::new(
            ActivityKind::UserRegistration,
            Uuid::new_v4(),
            "New member registered",
            "Yuki joined",
            Utc::now(),
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], serde_json::json!("user_registration"));
    }
}
