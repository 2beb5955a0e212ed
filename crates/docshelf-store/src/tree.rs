//! Folder projections over the live collection.

use docshelf_core::result::AppResult;
use docshelf_core::types::FolderPath;
use docshelf_entity::document::Document;
use docshelf_entity::folder::{FolderNode, PathListing, folder_id};

use crate::store::DocumentStore;

impl DocumentStore {
    /// Documents and immediate subfolder names at `path`.
    ///
    /// Only live documents participate; trashed documents leave the
    /// folder structure until restored.
    pub async fn list_by_path(&self, path: &FolderPath) -> AppResult<PathListing> {
        let live = self.load_live().await?;
        Ok(build_listing(&live, path))
    }

    /// The full folder tree, rebuilt from the live collection.
    pub async fn folder_tree(&self) -> AppResult<FolderNode> {
        let live = self.load_live().await?;
        Ok(build_node(FolderPath::root(), &live))
    }
}

fn build_listing(live: &[Document], path: &FolderPath) -> PathListing {
    let documents = live
        .iter()
        .filter(|d| d.path == *path)
        .cloned()
        .collect();
    PathListing {
        documents,
        subfolders: child_names(live, path),
    }
}

/// Names of the folders one segment below `path`, sorted and deduplicated.
fn child_names(live: &[Document], path: &FolderPath) -> Vec<String> {
    let mut names: Vec<String> = live
        .iter()
        .filter(|d| d.path.starts_with(path) && d.path.depth() > path.depth())
        .filter_map(|d| d.path.segments().get(path.depth()).cloned())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn build_node(path: FolderPath, live: &[Document]) -> FolderNode {
    let documents: Vec<Document> = live
        .iter()
        .filter(|d| d.path == path)
        .cloned()
        .collect();

    let subfolders: Vec<FolderNode> = child_names(live, &path)
        .into_iter()
        .map(|name| build_node(path.child(name), live))
        .collect();

    let created_at = documents
        .iter()
        .map(|d| d.created_at)
        .chain(subfolders.iter().filter_map(|f| f.created_at))
        .min();
    let modified_at = documents
        .iter()
        .map(|d| d.modified_at)
        .chain(subfolders.iter().filter_map(|f| f.modified_at))
        .max();

    FolderNode {
        id: folder_id(&path),
        name: path.name().map_or_else(|| "/".to_string(), str::to_string),
        documents,
        subfolders,
        created_at,
        modified_at,
        path,
    }
}
