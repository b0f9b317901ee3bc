//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Scheduled maintenance job configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether scheduled jobs run in this process.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Days to retain notification dismissal records.
    #[serde(default = "default_dismissal_retention")]
    pub dismissal_retention_days: u32,
    /// Days to retain profile view records.
    #[serde(default = "default_profile_view_retention")]
    pub profile_view_retention_days: u32,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            dismissal_retention_days: default_dismissal_retention(),
            profile_view_retention_days: default_profile_view_retention(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_dismissal_retention() -> u32 {
    30
}

fn default_profile_view_retention() -> u32 {
    90
}
