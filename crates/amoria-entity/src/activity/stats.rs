//! System statistics model.

use serde::{Deserialize, Serialize};

/// Today-versus-total platform counters for the admin dashboard.
///
/// "Today" means since UTC midnight. Every field is computed with a fresh
/// query; nothing here is cached or incrementally maintained.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SystemStats {
    /// All registered members.
    pub total_members: i64,
    /// Members who registered today.
    pub new_members_today: i64,
    /// All mutual matches ever formed.
    pub total_matches: i64,
    /// Matches formed today.
    pub matches_today: i64,
    /// All direct messages ever sent.
    pub total_messages: i64,
    /// Messages sent today.
    pub messages_today: i64,
    /// Photos waiting for moderation.
    pub pending_photos: i64,
    /// Abuse reports still open.
    pub open_reports: i64,
    /// Distinct members active today.
    pub active_members_today: i64,
}
