//! # docshelf-storage
//!
//! Key-value storage backends for DocShelf: an in-memory store for tests
//! and ephemeral embedding, and a single-file JSON store for durable
//! local persistence. Both implement [`KeyValueStore`].

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use docshelf_core::config::storage::StorageConfig;
use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::KeyValueStore;

/// Construct the storage backend named by configuration.
pub async fn open_backend(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    match config.backend.as_str() {
        "memory" => {
            tracing::info!("Using in-memory storage backend");
            Ok(Arc::new(MemoryStore::new()))
        }
        "file" => {
            tracing::info!(path = %config.file.path, "Using file storage backend");
            let store = FileStore::open(&config.file.path).await?;
            Ok(Arc::new(store))
        }
        other => Err(AppError::configuration(format!(
            "Unknown storage backend '{other}' (expected 'memory' or 'file')"
        ))),
    }
}
