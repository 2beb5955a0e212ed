//! In-memory storage backend using DashMap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use docshelf_core::result::AppResult;
use docshelf_core::traits::KeyValueStore;

/// In-memory key-value store.
///
/// Clones share the same underlying map, so a clone handed to a store and
/// a clone kept by a test observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// The underlying map.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn set_many(&self, entries: &[(String, String)]) -> AppResult<()> {
        // Map inserts cannot fail, so a returned Ok always covers every entry.
        for (key, value) in entries {
            self.entries.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
