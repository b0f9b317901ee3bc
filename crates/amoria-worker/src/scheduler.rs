//! Cron scheduler for nightly retention sweeps.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use amoria_core::AppError;

use crate::sweeper::RetentionSweeper;

/// Cron-based scheduler that drives the retention sweeps
pub struct SweepScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Sweeper shared with every schedule entry
    sweeper: Arc<RetentionSweeper>,
}

impl std::fmt::Debug for SweepScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepScheduler").finish()
    }
}

impl SweepScheduler {
    /// Create a new sweep scheduler
    pub async fn new(sweeper: Arc<RetentionSweeper>) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler, sweeper })
    }

    /// Register all default scheduled tasks
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_dismissal_sweep().await?;
        self.register_profile_view_sweep().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Sweep scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Sweep scheduler shut down");
        Ok(())
    }

    /// Dismissal sweep — every day at 2 AM
    async fn register_dismissal_sweep(&self) -> Result<(), AppError> {
        let sweeper = Arc::clone(&self.sweeper);
        let job = CronJob::new_async("0 0 2 * * *", move |_uuid, _lock| {
            let sweeper = Arc::clone(&sweeper);
            Box::pin(async move {
                if let Err(e) = sweeper.sweep_dismissals().await {
                    tracing::error!("Dismissal sweep failed: {}", e);
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create dismissal_sweep schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add dismissal_sweep schedule: {}", e))
        })?;

        tracing::info!("Registered: dismissal_sweep (daily at 2AM)");
        Ok(())
    }

    /// Profile view sweep — every day at 3 AM
    async fn register_profile_view_sweep(&self) -> Result<(), AppError> {
        let sweeper = Arc::clone(&self.sweeper);
        let job = CronJob::new_async("0 0 3 * * *", move |_uuid, _lock| {
            let sweeper = Arc::clone(&sweeper);
            Box::pin(async move {
                if let Err(e) = sweeper.sweep_profile_views().await {
                    tracing::error!("Profile view sweep failed: {}", e);
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create profile_view_sweep schedule: {}",
                e
            ))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add profile_view_sweep schedule: {}", e))
        })?;

        tracing::info!("Registered: profile_view_sweep (daily at 3AM)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amoria_core::config::{DatabaseConfig, WorkerConfig};
    use amoria_database::DatabasePool;
    use amoria_database::repositories::{DismissalRepository, ProfileViewRepository};

    fn sweeper() -> Arc<RetentionSweeper> {
        // Lazy pool: the lifecycle below never runs a job, so no
        // database is needed.
        let pool = DatabasePool::connect_lazy(&DatabaseConfig::default())
            .expect("lazy pool")
            .into_pool();
        Arc::new(RetentionSweeper::new(
            Arc::new(DismissalRepository::new(pool.clone())),
            Arc::new(ProfileViewRepository::new(pool)),
            WorkerConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_scheduler_registers_starts_and_shuts_down() {
        let mut scheduler = SweepScheduler::new(sweeper()).await.expect("create");
        scheduler.register_default_tasks().await.expect("register");
        scheduler.start().await.expect("start");
        scheduler.shutdown().await.expect("shutdown");
    }
}
