//! Durability of the file backend across sessions.

use std::path::Path;
use std::sync::Arc;

use docshelf::{AppConfig, DocumentStore, FileStore, KeyValueStore};

use crate::helpers::make_doc;

fn file_config(path: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = "file".to_string();
    config.storage.file.path = path.to_string_lossy().into_owned();
    config
}

#[tokio::test]
async fn test_first_open_seeds_the_library() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("shelf.json"));

    let store = docshelf::open(&config).await.unwrap();
    assert_eq!(store.list_all().await.unwrap().len(), 6);
    assert_eq!(store.tags().list().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_documents_survive_reopen_without_reseeding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.json");
    let config = file_config(&path);

    let store = docshelf::open(&config).await.unwrap();
    let added = store
        .create(make_doc("My Notes.txt", &["Personal"]))
        .await
        .unwrap();
    drop(store);

    let reopened = docshelf::open(&config).await.unwrap();
    let live = reopened.list_all().await.unwrap();
    assert_eq!(live.len(), 7);
    assert!(reopened.get_document(added.id).await.is_ok());
}

#[tokio::test]
async fn test_trash_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.json");
    let config = file_config(&path);

    let store = docshelf::open(&config).await.unwrap();
    let doc = store.create(make_doc("Discard.txt", &[])).await.unwrap();
    store.soft_delete(doc.id).await.unwrap();
    drop(store);

    let reopened = docshelf::open(&config).await.unwrap();
    let trashed = reopened.list_trashed().await.unwrap();
    assert_eq!(trashed.len(), 1);
    assert_eq!(trashed[0].id, doc.id);

    reopened.restore(doc.id).await.unwrap();
    assert!(reopened.get_document(doc.id).await.is_ok());
}

#[tokio::test]
async fn test_open_writes_the_schema_marker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.json");

    let store = docshelf::open(&file_config(&path)).await.unwrap();
    drop(store);

    let kv = FileStore::open(&path).await.unwrap();
    let marker = kv.get(&docshelf_store::keys::schema_version()).await.unwrap();
    assert_eq!(marker.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_corrupt_collection_reads_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shelf.json");

    let kv = Arc::new(FileStore::open(&path).await.unwrap());
    kv.set(&docshelf_store::keys::live_documents(), "{ not json")
        .await
        .unwrap();

    let store = DocumentStore::new(kv.clone());
    assert!(store.list_all().await.unwrap().is_empty());

    // The next write replaces the damaged key for good.
    store
        .create(make_doc("Recovered.txt", &[]))
        .await
        .unwrap();
    drop(store);
    drop(kv);

    let reopened = FileStore::open(&path).await.unwrap();
    let raw = reopened
        .get(&docshelf_store::keys::live_documents())
        .await
        .unwrap()
        .unwrap();
    assert!(raw.contains("Recovered.txt"));
}
