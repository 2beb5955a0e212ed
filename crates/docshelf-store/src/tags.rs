//! Persisted tag registry.

use std::sync::Arc;

use tracing::info;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::KeyValueStore;
use docshelf_core::types::TagId;
use docshelf_entity::tag::{Tag, TagColor};

use crate::keys;

/// Registry of the tags documents may reference.
///
/// Documents store tag ids only; names and colors live here. A document
/// referencing an id the registry no longer knows is not an error, the
/// dangling id simply resolves to nothing.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    kv: Arc<dyn KeyValueStore>,
}

impl TagRegistry {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Every registered tag, in stored order.
    pub async fn list(&self) -> AppResult<Vec<Tag>> {
        match self.kv.get(&keys::tag_registry()).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(tags) => Ok(tags),
                Err(e) => {
                    tracing::warn!(error = %e, "Tag registry is corrupt; treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    /// Fetch one tag by id.
    pub async fn get(&self, id: TagId) -> AppResult<Tag> {
        let tags = self.list().await?;
        tags.into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::not_found(format!("Tag {id} not found")))
    }

    /// Resolve ids to tags, skipping any the registry does not know.
    pub async fn resolve(&self, ids: &[TagId]) -> AppResult<Vec<Tag>> {
        let tags = self.list().await?;
        Ok(ids
            .iter()
            .filter_map(|id| tags.iter().find(|t| t.id == *id).cloned())
            .collect())
    }

    /// Register the default palette unless tags already exist.
    ///
    /// Returns the registry contents either way.
    pub async fn ensure_defaults(&self) -> AppResult<Vec<Tag>> {
        if self.kv.contains(&keys::tag_registry()).await? {
            return self.list().await;
        }
        let defaults = default_tags();
        self.save(&defaults).await?;

        info!(count = defaults.len(), "Default tags registered");
        Ok(defaults)
    }

    async fn save(&self, tags: &[Tag]) -> AppResult<()> {
        let json = serde_json::to_string(tags)?;
        self.kv.set(&keys::tag_registry(), &json).await
    }
}

fn default_tags() -> Vec<Tag> {
    vec![
        Tag::new("Research", TagColor::Blue),
        Tag::new("Literature", TagColor::Green),
        Tag::new("Methodology", TagColor::Purple),
        Tag::new("Results", TagColor::Orange),
        Tag::new("Discussion", TagColor::Yellow),
        Tag::new("Important", TagColor::Red),
    ]
}
