//! Retention sweeps for record types that accumulate without bound.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing;

use amoria_core::config::WorkerConfig;
use amoria_core::AppResult;
use amoria_database::repositories::{DismissalRepository, ProfileViewRepository};

/// Prunes aged rows according to the configured retention windows.
///
/// Dismissal records only need to outlive the notifications they suppress,
/// and profile views older than the retention window no longer contribute
/// to any feed or dashboard, so both tables are swept nightly.
#[derive(Debug)]
pub struct RetentionSweeper {
    /// Notification dismissal records
    dismissals: Arc<DismissalRepository>,
    /// Profile view records
    profile_views: Arc<ProfileViewRepository>,
    /// Retention windows
    config: WorkerConfig,
}

impl RetentionSweeper {
    /// Create a new retention sweeper
    pub fn new(
        dismissals: Arc<DismissalRepository>,
        profile_views: Arc<ProfileViewRepository>,
        config: WorkerConfig,
    ) -> Self {
        Self {
            dismissals,
            profile_views,
            config,
        }
    }

    /// Remove dismissal records older than the retention window
    pub async fn sweep_dismissals(&self) -> AppResult<u64> {
        tracing::info!("Running dismissal retention sweep");

        let cutoff = Utc::now() - Duration::days(i64::from(self.config.dismissal_retention_days));
        let count = self.dismissals.delete_older_than(cutoff).await?;

        tracing::info!(
            "Removed {} dismissal records older than {} days",
            count,
            self.config.dismissal_retention_days
        );
        Ok(count)
    }

    /// Remove profile view records older than the retention window
    pub async fn sweep_profile_views(&self) -> AppResult<u64> {
        tracing::info!("Running profile view retention sweep");

        let cutoff =
            Utc::now() - Duration::days(i64::from(self.config.profile_view_retention_days));
        let count = self.profile_views.delete_older_than(cutoff).await?;

        tracing::info!(
            "Removed {} profile view records older than {} days",
            count,
            self.config.profile_view_retention_days
        );
        Ok(count)
    }
}
