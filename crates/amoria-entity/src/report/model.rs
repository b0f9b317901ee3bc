//! Abuse report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReportStatus;

/// An abuse report filed by one member against another.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// Member who filed the report.
    pub reporter_id: Uuid,
    /// Member being reported.
    pub reported_id: Uuid,
    /// Free-text reason supplied by the reporter.
    pub reason: String,
    /// Current lifecycle state.
    pub status: ReportStatus,
    /// When the report was filed.
    pub created_at: DateTime<Utc>,
    /// Whether a moderator has seen the report in their feed.
    pub is_seen: bool,
}
