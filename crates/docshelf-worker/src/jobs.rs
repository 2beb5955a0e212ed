//! Maintenance jobs and their execution errors.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing;

use docshelf_core::error::AppError;
use docshelf_store::DocumentStore;

/// A named maintenance task the scheduler can run.
#[async_trait]
pub trait MaintenanceJob: Send + Sync + std::fmt::Debug + 'static {
    /// Short name used in schedules and logs.
    fn name(&self) -> &str;

    /// Run the task, returning a summary of what it did.
    async fn run(&self) -> Result<Value, JobExecutionError>;
}

/// Error from job execution
#[derive(Debug, thiserror::Error)]
pub enum JobExecutionError {
    /// Permanent failure; do not retry
    #[error("Permanent job failure: {0}")]
    Permanent(String),

    /// Transient failure; may retry
    #[error("Transient job failure: {0}")]
    Transient(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] AppError),
}

/// Purges trashed documents older than the retention window.
#[derive(Debug)]
pub struct SweepJob {
    /// Document store to sweep
    store: Arc<DocumentStore>,
    /// Retention window in days
    retention_days: u32,
}

impl SweepJob {
    /// Create a new sweep job
    pub fn new(store: Arc<DocumentStore>, retention_days: u32) -> Self {
        Self {
            store,
            retention_days,
        }
    }
}

#[async_trait]
impl MaintenanceJob for SweepJob {
    fn name(&self) -> &str {
        "trash_sweep"
    }

    async fn run(&self) -> Result<Value, JobExecutionError> {
        tracing::info!("Running trash sweep");

        let purged = self
            .store
            .sweep_expired_at(Utc::now(), self.retention_days)
            .await?;

        tracing::info!("Purged {} expired documents", purged);

        Ok(serde_json::json!({
            "task": "trash_sweep",
            "expired_documents_purged": purged,
            "retention_days": self.retention_days,
        }))
    }
}
