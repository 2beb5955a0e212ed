//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use docshelf_core::error::AppError;

use crate::jobs::{JobExecutionError, MaintenanceJob};

/// Cron-based scheduler for periodic background tasks
pub struct MaintenanceScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
}

impl std::fmt::Debug for MaintenanceScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaintenanceScheduler").finish()
    }
}

impl MaintenanceScheduler {
    /// Create a new maintenance scheduler
    pub async fn new() -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self { scheduler })
    }

    /// Register a job on a six-field cron schedule
    pub async fn register(
        &self,
        job: Arc<dyn MaintenanceJob>,
        schedule: &str,
    ) -> Result<(), AppError> {
        let name = job.name().to_string();

        let job_for_cron = Arc::clone(&job);
        let cron_job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let job = Arc::clone(&job_for_cron);
            Box::pin(async move {
                run_now(job.as_ref()).await;
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create {} schedule: {}", name, e))
        })?;

        self.scheduler
            .add(cron_job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add {} schedule: {}", name, e)))?;

        tracing::info!("Registered: {} ({})", name, schedule);
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Maintenance scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Maintenance scheduler shut down");
        Ok(())
    }
}

/// Run a job immediately and log its outcome.
///
/// Scheduled ticks have nowhere to surface an error, so every outcome is
/// reported here. A transient failure is logged at warn level; the next
/// scheduled run retries it.
pub async fn run_now(job: &dyn MaintenanceJob) {
    match job.run().await {
        Ok(summary) => {
            tracing::info!("Job '{}' finished: {}", job.name(), summary);
        }
        Err(JobExecutionError::Transient(reason)) => {
            tracing::warn!(
                "Job '{}' failed, next scheduled run will retry: {}",
                job.name(),
                reason
            );
        }
        Err(e) => {
            tracing::error!("Job '{}' failed: {}", job.name(), e);
        }
    }
}
