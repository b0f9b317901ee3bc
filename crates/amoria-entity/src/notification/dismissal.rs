//! Durable notification dismissal entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::key::NotificationKey;
use super::kind::NotificationKind;

/// A dismissal record for one notification in one client session.
///
/// Keyed on `(kind, source_id, member_id, session_id)`; writing the same
/// dismissal twice is an upsert, so the operation is idempotent. Dismissed
/// keys are filtered out of feed assembly for that session.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dismissal {
    /// Kind of the dismissed notification.
    pub kind: NotificationKind,
    /// Source row id of the dismissed notification.
    pub source_id: Uuid,
    /// Member who dismissed it.
    pub member_id: Uuid,
    /// Session the dismissal applies to.
    pub session_id: Uuid,
    /// When the dismissal was recorded.
    pub dismissed_at: DateTime<Utc>,
}

impl Dismissal {
    /// The notification key this dismissal suppresses.
    pub fn key(&self) -> NotificationKey {
        NotificationKey::new(self.kind, self.source_id)
    }
}
