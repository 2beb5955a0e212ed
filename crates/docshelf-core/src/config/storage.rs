//! Key-value storage backend configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Which backend to use: `"memory"` or `"file"`.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// File-backed storage configuration.
    #[serde(default)]
    pub file: FileStoreConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            file: FileStoreConfig::default(),
        }
    }
}

/// Configuration for the single-file JSON backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStoreConfig {
    /// Path of the JSON file holding all persisted records.
    #[serde(default = "default_file_path")]
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            path: default_file_path(),
        }
    }
}

fn default_backend() -> String {
    "memory".to_string()
}

fn default_file_path() -> String {
    "./data/docshelf.json".to_string()
}
