//! Match request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle state of a match request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "match_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchRequestStatus {
    /// Waiting for the target member to respond.
    Pending,
    /// Accepted; a match row exists for the pair.
    Accepted,
    /// Declined by the target member.
    Declined,
}

impl MatchRequestStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

/// A one-directional match request awaiting a response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MatchRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Member who sent the request.
    pub requester_id: Uuid,
    /// Member the request targets.
    pub target_id: Uuid,
    /// Current lifecycle state.
    pub status: MatchRequestStatus,
    /// When the request was sent.
    pub created_at: DateTime<Utc>,
    /// Whether the target has seen the request.
    pub is_seen: bool,
}

impl MatchRequest {
    /// Pending requests count toward the target's badge.
    pub fn is_pending(&self) -> bool {
        self.status == MatchRequestStatus::Pending
    }
}
