//! Maintenance worker configuration.

use serde::{Deserialize, Serialize};

/// Maintenance worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the maintenance scheduler is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the recurring trash sweep (seconds field first).
    #[serde(default = "default_sweep_schedule")]
    pub sweep_schedule: String,
    /// Whether to run one sweep pass immediately at startup.
    #[serde(default = "default_true")]
    pub sweep_on_start: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            sweep_schedule: default_sweep_schedule(),
            sweep_on_start: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_schedule() -> String {
    // Every day at 3 AM
    "0 0 3 * * *".to_string()
}
