//! Single-file JSON storage backend.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::KeyValueStore;

/// File-backed key-value store.
///
/// The whole key space is one JSON object on disk. Every write serializes
/// the full map to a `.tmp` sibling and renames it over the target, so a
/// multi-key [`KeyValueStore::set_many`] lands atomically or not at all.
#[derive(Debug)]
pub struct FileStore {
    /// Path of the backing JSON file.
    path: PathBuf,
    /// In-memory view of the file, committed only after a successful flush.
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open a file-backed store, loading any existing entries.
    ///
    /// A missing file starts the store empty; the file is created on the
    /// first write. An unparseable file also starts the store empty (with
    /// a warning) so one mangled write cannot brick the application; the
    /// next flush replaces it.
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Store file is not valid JSON; starting empty"
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read store file '{}'", path.display()),
                    e,
                ));
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// The path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Serialize `entries` and rename it over the backing file.
    async fn flush(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");

        tokio::fs::write(&tmp, json.as_bytes()).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write store file '{}'", tmp.display()),
                e,
            )
        })?;

        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to replace store file '{}'", self.path.display()),
                e,
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.set_many(&[(key.to_string(), value.to_string())]).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        if !entries.contains_key(key) {
            return Ok(());
        }

        // Flush a copy first; memory only moves once the disk write landed.
        let mut next = entries.clone();
        next.remove(key);
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.lock().await.contains_key(key))
    }

    async fn set_many(&self, updates: &[(String, String)]) -> AppResult<()> {
        let mut entries = self.entries.lock().await;

        // Flush a copy first; memory only moves once the disk write landed.
        let mut next = entries.clone();
        for (key, value) in updates {
            next.insert(key.clone(), value.clone());
        }
        self.flush(&next).await?;
        *entries = next;
        Ok(())
    }
}
