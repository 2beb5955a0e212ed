//! Trash retention configuration.

use serde::{Deserialize, Serialize};

/// Trash lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrashConfig {
    /// Days a soft-deleted document stays restorable before the sweep
    /// purges it.
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

impl Default for TrashConfig {
    fn default() -> Self {
        Self {
            retention_days: default_retention_days(),
        }
    }
}

fn default_retention_days() -> u32 {
    30
}
