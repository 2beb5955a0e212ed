//! Document entity model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{DocumentId, FolderPath, TagId};

use super::kind::DocumentKind;
use super::paper::PaperMetadata;

/// A document managed by DocShelf.
///
/// A document is in exactly one of two persisted collections at any time,
/// live or trashed, discriminated solely by `deleted_at`. Only the
/// soft-delete and restore transitions change that field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier, assigned at creation, immutable.
    pub id: DocumentId,
    /// Display name (including extension), not necessarily unique.
    pub name: String,
    /// Document classification, supplied by the upload caller.
    pub kind: DocumentKind,
    /// Payload size in bytes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    /// When the document was created. Set once.
    pub created_at: DateTime<Utc>,
    /// When the document was last mutated (content, notes, star, move,
    /// restore).
    pub modified_at: DateTime<Utc>,
    /// Tags by reference into the tag registry. Order is irrelevant.
    #[serde(default)]
    pub tags: Vec<TagId>,
    /// Folder location as path segments; empty means root.
    #[serde(default)]
    pub path: FolderPath,
    /// Inline payload: plain text or a data-URL string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Free-text annotation, editable independently of content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Starred flag.
    #[serde(default)]
    pub starred: bool,
    /// Present if and only if the document is in the trash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Research-paper catalog metadata, for catalog entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<PaperMetadata>,
}

impl Document {
    /// Check whether the document is currently in the trash.
    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check whether this trashed document has outlived the retention
    /// window. A document deleted exactly `retention_days` ago is not yet
    /// expired; expiry requires `deleted_at` to be strictly older.
    /// Always `false` for live documents.
    pub fn is_expired(&self, now: DateTime<Utc>, retention_days: u32) -> bool {
        match self.deleted_at {
            Some(deleted_at) => now - deleted_at > Duration::days(i64::from(retention_days)),
            None => false,
        }
    }

    /// Whole days left before the sweep may purge this document, rounded
    /// up, floored at zero. `None` for live documents.
    pub fn days_until_purge(&self, now: DateTime<Utc>, retention_days: u32) -> Option<i64> {
        let deleted_at = self.deleted_at?;
        let expires_at = deleted_at + Duration::days(i64::from(retention_days));
        let remaining = (expires_at - now).num_seconds();
        let days = remaining / 86_400 + i64::from(remaining % 86_400 > 0);
        Some(days.max(0))
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Explicit identifier; the store assigns one when absent.
    pub id: Option<DocumentId>,
    /// Display name.
    pub name: String,
    /// Document classification.
    pub kind: DocumentKind,
    /// Payload size in bytes.
    pub size_bytes: Option<u64>,
    /// Tag references.
    pub tags: Vec<TagId>,
    /// Folder location.
    pub path: FolderPath,
    /// Inline payload.
    pub content: Option<String>,
    /// Free-text annotation.
    pub notes: Option<String>,
    /// Starred flag.
    pub starred: bool,
    /// Research-paper catalog metadata.
    pub paper: Option<PaperMetadata>,
}
