//! DocShelf: a personal document library with folders, tags, trash, and
//! search, persisted through a pluggable key-value backend.
//!
//! This crate wires the workspace together. [`open`] builds a
//! [`DocumentStore`] from configuration and [`start_maintenance`] brings
//! up the background trash sweep. Everything an embedding application
//! needs is re-exported from here.

use std::sync::Arc;

use tracing;

pub mod telemetry;

pub use docshelf_core::config::AppConfig;
pub use docshelf_core::error::{AppError, ErrorKind};
pub use docshelf_core::result::AppResult;
pub use docshelf_core::traits::KeyValueStore;
pub use docshelf_core::types::{DocumentId, FolderPath, TagId};
pub use docshelf_entity::document::{
    CreateDocument, Document, DocumentKind, PaperMetadata,
    content::{data_url, is_data_url, parse_data_url},
};
pub use docshelf_entity::folder::{FolderNode, PathListing};
pub use docshelf_entity::tag::{Tag, TagColor};
pub use docshelf_storage::{FileStore, MemoryStore, open_backend};
pub use docshelf_store::{DocumentStore, TagRegistry, seed_if_empty};
pub use docshelf_worker::{MaintenanceJob, MaintenanceScheduler, SweepJob};

/// Open the document store described by `config`.
///
/// First use of an empty backend also seeds the default tags and the
/// sample paper library.
pub async fn open(config: &AppConfig) -> AppResult<DocumentStore> {
    // ── Step 1: Storage backend ──────────────────────────────────
    let kv = docshelf_storage::open_backend(&config.storage).await?;

    // ── Step 2: Document store + schema marker ───────────────────
    let store = DocumentStore::new(kv);
    store.ensure_schema().await?;

    // ── Step 3: First-run reference data ─────────────────────────
    if docshelf_store::seed_if_empty(&store).await? {
        tracing::info!("Opened a fresh library");
    }

    Ok(store)
}

/// Start the background maintenance worker, if enabled.
///
/// Returns the running scheduler so the caller can shut it down; `None`
/// when the worker is disabled in configuration.
pub async fn start_maintenance(
    config: &AppConfig,
    store: Arc<DocumentStore>,
) -> AppResult<Option<MaintenanceScheduler>> {
    if !config.worker.enabled {
        tracing::info!("Maintenance worker disabled");
        return Ok(None);
    }

    let sweep = Arc::new(SweepJob::new(store, config.trash.retention_days));

    if config.worker.sweep_on_start {
        docshelf_worker::run_now(sweep.as_ref()).await;
    }

    let scheduler = MaintenanceScheduler::new().await?;
    scheduler
        .register(sweep, &config.worker.sweep_schedule)
        .await?;
    scheduler.start().await?;

    Ok(Some(scheduler))
}
