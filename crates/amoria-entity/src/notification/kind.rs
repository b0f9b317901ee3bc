//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of notification kinds the platform produces.
///
/// Every presentation mapping below is an exhaustive match on purpose:
/// adding a variant refuses to compile until the icon, color, and
/// navigation target are all decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Someone favorited the member's profile.
    Like,
    /// A mutual match was formed.
    Match,
    /// A direct message arrived.
    Message,
    /// A match request is waiting for a response.
    MatchRequest,
    /// An abuse report was filed (admin feeds only).
    Report,
    /// A member wrote to the support desk (admin feeds only).
    AdminMessage,
    /// Someone viewed the member's profile.
    ProfileView,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Match => "match",
            Self::Message => "message",
            Self::MatchRequest => "match_request",
            Self::Report => "report",
            Self::AdminMessage => "admin_message",
            Self::ProfileView => "profile_view",
        }
    }

    /// Icon name rendered next to the notification.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Like => "heart",
            Self::Match => "sparkles",
            Self::Message => "message-circle",
            Self::MatchRequest => "user-plus",
            Self::Report => "flag",
            Self::AdminMessage => "life-buoy",
            Self::ProfileView => "eye",
        }
    }

    /// Accent color rendered with the notification.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Like => "#e91e63",
            Self::Match => "#9c27b0",
            Self::Message => "#2196f3",
            Self::MatchRequest => "#ff9800",
            Self::Report => "#f44336",
            Self::AdminMessage => "#009688",
            Self::ProfileView => "#607d8b",
        }
    }

    /// Where a client should navigate after the notification is read.
    pub fn navigation_target(&self) -> NavigationTarget {
        match self {
            Self::Like => NavigationTarget::Matches,
            Self::Match => NavigationTarget::Matches,
            Self::Message => NavigationTarget::Messages,
            Self::MatchRequest => NavigationTarget::Requests,
            Self::Report => NavigationTarget::Moderation,
            Self::AdminMessage => NavigationTarget::Support,
            Self::ProfileView => NavigationTarget::Visitors,
        }
    }

    /// Kinds that only ever appear in admin feeds.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Self::Report | Self::AdminMessage)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = amoria_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "match" => Ok(Self::Match),
            "message" => Ok(Self::Message),
            "match_request" => Ok(Self::MatchRequest),
            "report" => Ok(Self::Report),
            "admin_message" => Ok(Self::AdminMessage),
            "profile_view" => Ok(Self::ProfileView),
            _ => Err(amoria_core::AppError::validation(format!(
                "Invalid notification kind: '{s}'"
            ))),
        }
    }
}

/// Client destination associated with a notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// The matches overview.
    Matches,
    /// The conversation list.
    Messages,
    /// Incoming match requests.
    Requests,
    /// The admin moderation queue.
    Moderation,
    /// The support inbox.
    Support,
    /// The profile visitors page.
    Visitors,
}

impl NavigationTarget {
    /// Client route for this destination.
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Matches => "/matches",
            Self::Messages => "/messages",
            Self::Requests => "/requests",
            Self::Moderation => "/admin/moderation",
            Self::Support => "/admin/support",
            Self::Visitors => "/visitors",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_path())
    }
}
