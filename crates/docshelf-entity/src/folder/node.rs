//! Derived folder tree structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docshelf_core::types::FolderPath;

use crate::document::Document;

/// Derive the stable identifier for the folder at `path`.
///
/// Folders are not persisted entities, so their ids are a pure function
/// of the path (UUID v5 over the `/`-joined segments).
pub fn folder_id(path: &FolderPath) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, path.to_string().as_bytes())
}

/// A node in the derived folder tree.
///
/// The tree is a read-time projection of the live document collection
/// grouped by path. It is never persisted; every call rebuilds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Stable path-derived identifier.
    pub id: Uuid,
    /// Folder name (the final path segment; `"/"` for the root).
    pub name: String,
    /// Full path of this folder.
    pub path: FolderPath,
    /// Documents whose path equals this node's path.
    pub documents: Vec<Document>,
    /// Child folders one segment deeper, sorted by name.
    pub subfolders: Vec<FolderNode>,
    /// Earliest `created_at` among documents under this node, if any.
    pub created_at: Option<DateTime<Utc>>,
    /// Latest `modified_at` among documents under this node, if any.
    pub modified_at: Option<DateTime<Utc>>,
}

impl FolderNode {
    /// Number of documents in this node and every node beneath it.
    pub fn total_documents(&self) -> usize {
        self.documents.len()
            + self
                .subfolders
                .iter()
                .map(FolderNode::total_documents)
                .sum::<usize>()
    }

    /// Walk to the node at `path`, taken relative to this node.
    pub fn find(&self, path: &FolderPath) -> Option<&FolderNode> {
        let mut node = self;
        for segment in path.segments() {
            node = node.subfolders.iter().find(|f| f.name == *segment)?;
        }
        Some(node)
    }
}

/// Documents and immediate child folder names at one path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathListing {
    /// Documents whose path is exactly the listed path.
    pub documents: Vec<Document>,
    /// Names of the folders one segment deeper, sorted and deduplicated.
    pub subfolders: Vec<String>,
}
