//! Composite notification key.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::kind::NotificationKind;

/// Stable identity of an assembled notification.
///
/// Notifications have no table of their own, so their identity is derived:
/// the kind plus the id of the underlying domain row. The wire rendering is
/// `"{kind}-{uuid}"`, which stays stable across re-assembly and is what
/// dismissals are keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationKey {
    /// The notification kind.
    pub kind: NotificationKind,
    /// Id of the domain row this notification was derived from.
    pub source_id: Uuid,
}

impl NotificationKey {
    /// Create a key from a kind and its source row id.
    pub fn new(kind: NotificationKind, source_id: Uuid) -> Self {
        Self { kind, source_id }
    }
}

impl fmt::Display for NotificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.as_str(), self.source_id)
    }
}

impl FromStr for NotificationKey {
    type Err = amoria_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Kind names use underscores, so the first hyphen separates the
        // kind from the UUID.
        let (kind, id) = s.split_once('-').ok_or_else(|| {
            amoria_core::AppError::validation(format!("Invalid notification key: '{s}'"))
        })?;
        let kind: NotificationKind = kind.parse()?;
        let source_id = Uuid::parse_str(id).map_err(|_| {
            amoria_core::AppError::validation(format!("Invalid notification key: '{s}'"))
        })?;
        Ok(Self { kind, source_id })
    }
}

impl Serialize for NotificationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NotificationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
