//! Document lifecycle and listing operations.

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::KeyValueStore;
use docshelf_core::types::{DocumentId, FolderPath, TagId};
use docshelf_entity::document::{CreateDocument, Document};

use crate::keys;
use crate::tags::TagRegistry;

/// Sole authority over document and trash state.
///
/// A document is live or trashed, never both and never neither: the two
/// persisted collections are rewritten together whenever a document moves
/// between them. There is no direct live-to-gone transition; every
/// deletion passes through the trash.
///
/// Operations are single-step: one logical read-modify-write per call
/// with no locking. Callers must not issue overlapping mutating calls
/// against the same backend without awaiting completion.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Injected host storage.
    pub(crate) kv: Arc<dyn KeyValueStore>,
    /// Tag registry sharing the same backend.
    pub(crate) tags: TagRegistry,
}

impl DocumentStore {
    /// Creates a document store over the given backend.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        let tags = TagRegistry::new(Arc::clone(&kv));
        Self { kv, tags }
    }

    /// The tag registry backing this store.
    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    /// Record the schema version on first use, and warn when the
    /// persisted state was written by a newer layout than this build
    /// understands.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        match self.kv.get(&keys::schema_version()).await? {
            Some(raw) => {
                match raw.trim().parse::<u32>() {
                    Ok(version) if version > keys::SCHEMA_VERSION => {
                        tracing::warn!(
                            found = version,
                            supported = keys::SCHEMA_VERSION,
                            "Persisted state uses a newer schema than this build"
                        );
                    }
                    Ok(_) => {}
                    Err(_) => {
                        tracing::warn!(value = %raw, "Schema marker is unreadable");
                    }
                }
                Ok(())
            }
            None => {
                self.kv
                    .set(&keys::schema_version(), &keys::SCHEMA_VERSION.to_string())
                    .await
            }
        }
    }

    // ── Lifecycle ──────────────────────────────────────────────

    /// Create a document in the live collection.
    ///
    /// Assigns an identifier when the input carries none and stamps both
    /// timestamps. Fails only when the backend write fails.
    pub async fn create(&self, input: CreateDocument) -> AppResult<Document> {
        let now = Utc::now();
        let document = Document {
            id: input.id.unwrap_or_else(DocumentId::new),
            name: input.name,
            kind: input.kind,
            size_bytes: input.size_bytes,
            created_at: now,
            modified_at: now,
            tags: input.tags,
            path: input.path,
            content: input.content,
            notes: input.notes,
            starred: input.starred,
            deleted_at: None,
            paper: input.paper,
        };

        let mut live = self.load_live().await?;
        live.push(document.clone());
        self.save_live(&live).await?;

        info!(document_id = %document.id, name = %document.name, "Document created");
        Ok(document)
    }

    /// Fetch a live document by id.
    pub async fn get_document(&self, id: DocumentId) -> AppResult<Document> {
        let live = self.load_live().await?;
        live.into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// Replace a live document's content.
    pub async fn update_content(&self, id: DocumentId, content: String) -> AppResult<Document> {
        let mut live = self.load_live().await?;
        let doc = Self::find_mut(&mut live, id)?;
        doc.content = Some(content);
        doc.modified_at = Utc::now();
        let updated = doc.clone();
        self.save_live(&live).await?;

        info!(document_id = %id, "Document content updated");
        Ok(updated)
    }

    /// Replace a live document's notes.
    pub async fn update_notes(&self, id: DocumentId, notes: String) -> AppResult<Document> {
        let mut live = self.load_live().await?;
        let doc = Self::find_mut(&mut live, id)?;
        doc.notes = Some(notes);
        doc.modified_at = Utc::now();
        let updated = doc.clone();
        self.save_live(&live).await?;

        info!(document_id = %id, "Document notes updated");
        Ok(updated)
    }

    /// Flip a live document's starred flag.
    pub async fn toggle_star(&self, id: DocumentId) -> AppResult<Document> {
        let mut live = self.load_live().await?;
        let doc = Self::find_mut(&mut live, id)?;
        doc.starred = !doc.starred;
        doc.modified_at = Utc::now();
        let updated = doc.clone();
        self.save_live(&live).await?;

        info!(document_id = %id, starred = updated.starred, "Document star toggled");
        Ok(updated)
    }

    /// Move a live document to a new folder path.
    ///
    /// The target path is not validated: folders exist implicitly through
    /// the documents whose paths reference them.
    pub async fn move_document(&self, id: DocumentId, new_path: FolderPath) -> AppResult<Document> {
        let mut live = self.load_live().await?;
        let doc = Self::find_mut(&mut live, id)?;
        doc.path = new_path;
        doc.modified_at = Utc::now();
        let updated = doc.clone();
        self.save_live(&live).await?;

        info!(document_id = %id, path = %updated.path, "Document moved");
        Ok(updated)
    }

    /// Move a live document to the trash.
    ///
    /// Sets `deleted_at` and rewrites both collections in one batched
    /// write, so the document is never visible in both or in neither.
    /// `modified_at` is left untouched.
    pub async fn soft_delete(&self, id: DocumentId) -> AppResult<()> {
        let mut live = self.load_live().await?;
        let position = live
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;
        let mut doc = live.remove(position);
        doc.deleted_at = Some(Utc::now());

        let mut trashed = self.load_trashed().await?;
        trashed.push(doc);
        self.save_both(&live, &trashed).await?;

        info!(document_id = %id, "Document moved to trash");
        Ok(())
    }

    /// Return a trashed document to the live collection.
    ///
    /// Clears `deleted_at`, stamps a fresh `modified_at`, and rewrites
    /// both collections in one batched write.
    pub async fn restore(&self, id: DocumentId) -> AppResult<()> {
        let mut trashed = self.load_trashed().await?;
        let position = trashed
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found in trash")))?;
        let mut doc = trashed.remove(position);
        doc.deleted_at = None;
        doc.modified_at = Utc::now();

        let mut live = self.load_live().await?;
        live.push(doc);
        self.save_both(&live, &trashed).await?;

        info!(document_id = %id, "Document restored from trash");
        Ok(())
    }

    /// Remove a document from the trash permanently.
    ///
    /// Idempotent: purging an id that is not in the trash returns
    /// `Ok(false)` without writing anything.
    pub async fn purge(&self, id: DocumentId) -> AppResult<bool> {
        let mut trashed = self.load_trashed().await?;
        let Some(position) = trashed.iter().position(|d| d.id == id) else {
            return Ok(false);
        };
        trashed.remove(position);
        self.save_trashed(&trashed).await?;

        info!(document_id = %id, "Document purged from trash");
        Ok(true)
    }

    /// Purge every trashed document whose `deleted_at` is strictly older
    /// than the retention window. Returns the number purged.
    pub async fn sweep_expired(&self, retention_days: u32) -> AppResult<u64> {
        self.sweep_expired_at(Utc::now(), retention_days).await
    }

    /// Sweep against an explicit logical "now".
    ///
    /// A document deleted exactly `retention_days` ago survives; repeated
    /// sweeps at the same instant purge nothing further.
    pub async fn sweep_expired_at(
        &self,
        now: DateTime<Utc>,
        retention_days: u32,
    ) -> AppResult<u64> {
        let trashed = self.load_trashed().await?;
        let before = trashed.len();
        let kept: Vec<Document> = trashed
            .into_iter()
            .filter(|d| !d.is_expired(now, retention_days))
            .collect();
        let purged = (before - kept.len()) as u64;

        if purged > 0 {
            self.save_trashed(&kept).await?;
            info!(purged, retention_days, "Expired trash swept");
        }
        Ok(purged)
    }

    // ── Listings ───────────────────────────────────────────────

    /// Every live document, in stored order.
    pub async fn list_all(&self) -> AppResult<Vec<Document>> {
        self.load_live().await
    }

    /// Every trashed document, in stored order.
    pub async fn list_trashed(&self) -> AppResult<Vec<Document>> {
        self.load_trashed().await
    }

    /// Live documents carrying the given tag.
    pub async fn list_by_tag(&self, tag_id: TagId) -> AppResult<Vec<Document>> {
        let live = self.load_live().await?;
        Ok(live.into_iter().filter(|d| d.tags.contains(&tag_id)).collect())
    }

    /// Live documents with the starred flag set.
    pub async fn list_starred(&self) -> AppResult<Vec<Document>> {
        let live = self.load_live().await?;
        Ok(live.into_iter().filter(|d| d.starred).collect())
    }

    /// The most recently modified live documents, newest first.
    ///
    /// The sort is stable, so documents sharing a timestamp keep their
    /// stored order.
    pub async fn list_recent(&self, limit: usize) -> AppResult<Vec<Document>> {
        let mut live = self.load_live().await?;
        live.sort_by_key(|d| Reverse(d.modified_at));
        live.truncate(limit);
        Ok(live)
    }

    // ── Persistence helpers ────────────────────────────────────

    fn find_mut(docs: &mut [Document], id: DocumentId) -> AppResult<&mut Document> {
        docs.iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    pub(crate) async fn load_live(&self) -> AppResult<Vec<Document>> {
        self.load_collection(&keys::live_documents()).await
    }

    pub(crate) async fn load_trashed(&self) -> AppResult<Vec<Document>> {
        self.load_collection(&keys::trashed_documents()).await
    }

    /// Load one collection, absorbing a corrupt payload as empty.
    ///
    /// Backend read failures still propagate; only an unparseable value
    /// is downgraded, keeping the store usable at the cost of hiding the
    /// damaged records until the next write replaces them.
    async fn load_collection(&self, key: &str) -> AppResult<Vec<Document>> {
        match self.kv.get(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(docs) => Ok(docs),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Persisted collection is corrupt; treating as empty");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    async fn save_live(&self, live: &[Document]) -> AppResult<()> {
        let json = serde_json::to_string(live)?;
        self.kv.set(&keys::live_documents(), &json).await
    }

    async fn save_trashed(&self, trashed: &[Document]) -> AppResult<()> {
        let json = serde_json::to_string(trashed)?;
        self.kv.set(&keys::trashed_documents(), &json).await
    }

    /// Rewrite both collections as one batched write.
    async fn save_both(&self, live: &[Document], trashed: &[Document]) -> AppResult<()> {
        let entries = [
            (keys::live_documents(), serde_json::to_string(live)?),
            (keys::trashed_documents(), serde_json::to_string(trashed)?),
        ];
        self.kv.set_many(&entries).await
    }
}
