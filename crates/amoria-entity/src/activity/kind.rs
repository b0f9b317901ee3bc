//! Activity kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of event kinds shown on the admin activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A member registered.
    UserRegistration,
    /// A mutual match was formed.
    NewMatch,
    /// A direct message was sent.
    Message,
    /// A member favorited another.
    Like,
    /// A derived platform alert (e.g. photos waiting for moderation).
    SystemAlert,
    /// A profile was viewed.
    ProfileView,
}

impl ActivityKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserRegistration => "user_registration",
            Self::NewMatch => "new_match",
            Self::Message => "message",
            Self::Like => "like",
            Self::SystemAlert => "system_alert",
            Self::ProfileView => "profile_view",
        }
    }

    /// Icon name rendered next to the activity row.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::UserRegistration => "user-plus",
            Self::NewMatch => "sparkles",
            Self::Message => "message-circle",
            Self::Like => "heart",
            Self::SystemAlert => "alert-triangle",
            Self::ProfileView => "eye",
        }
    }

    /// Accent color rendered with the activity row.
    pub fn color(&self) -> &'static str {
        match self {
            Self::UserRegistration => "#4caf50",
            Self::NewMatch => "#9c27b0",
            Self::Message => "#2196f3",
            Self::Like => "#e91e63",
            Self::SystemAlert => "#ff5722",
            Self::ProfileView => "#607d8b",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(ActivityKind::UserRegistration).unwrap(),
            serde_json::json!("user_registration")
        );
        assert_eq!(
            serde_json::to_value(ActivityKind::NewMatch).unwrap(),
            serde_json::json!("new_match")
        );
        assert_eq!(
            serde_json::to_value(ActivityKind::SystemAlert).unwrap(),
            serde_json::json!("system_alert")
        );
    }
}
