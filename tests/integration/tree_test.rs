//! Folder listings and the derived tree.

use docshelf::FolderPath;

use crate::helpers::TestShelf;

#[tokio::test]
async fn test_tree_reflects_document_paths() {
    let shelf = TestShelf::new();
    shelf.create_at("paper.pdf", &["Research"]).await;
    shelf.create_at("raw.csv", &["Research", "Data"]).await;

    let tree = shelf.store.folder_tree().await.unwrap();
    assert_eq!(tree.name, "/");
    assert!(tree.documents.is_empty());
    assert_eq!(tree.subfolders.len(), 1);
    assert_eq!(tree.total_documents(), 2);

    let research = &tree.subfolders[0];
    assert_eq!(research.name, "Research");
    assert_eq!(research.documents.len(), 1);
    assert_eq!(research.subfolders.len(), 1);

    let data = &research.subfolders[0];
    assert_eq!(data.name, "Data");
    assert_eq!(data.documents.len(), 1);
    assert!(data.subfolders.is_empty());
}

#[tokio::test]
async fn test_folders_exist_only_through_documents() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("only.txt", &["Ephemeral"]).await;

    let before = shelf.store.folder_tree().await.unwrap();
    assert!(before.find(&FolderPath::from_segments(["Ephemeral"])).is_some());

    // Trash the only document; its folder vanishes with it.
    shelf.store.soft_delete(doc.id).await.unwrap();
    let after = shelf.store.folder_tree().await.unwrap();
    assert!(after.find(&FolderPath::from_segments(["Ephemeral"])).is_none());

    // And it comes back on restore.
    shelf.store.restore(doc.id).await.unwrap();
    let restored = shelf.store.folder_tree().await.unwrap();
    assert!(restored.find(&FolderPath::from_segments(["Ephemeral"])).is_some());
}

#[tokio::test]
async fn test_move_changes_listings_without_validation() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("wandering.txt", &["Inbox"]).await;

    // The target folder holds nothing; the move still succeeds.
    let target = FolderPath::from_segments(["Archive", "2026"]);
    let moved = shelf.store.move_document(doc.id, target.clone()).await.unwrap();
    assert_eq!(moved.path, target);
    assert!(moved.modified_at > doc.modified_at);

    let old = shelf
        .store
        .list_by_path(&FolderPath::from_segments(["Inbox"]))
        .await
        .unwrap();
    assert!(old.documents.is_empty());

    let new = shelf.store.list_by_path(&target).await.unwrap();
    assert_eq!(new.documents.len(), 1);
    assert_eq!(new.documents[0].id, doc.id);

    // The intermediate folder now exists in the root listing.
    let root = shelf.store.list_by_path(&FolderPath::root()).await.unwrap();
    assert_eq!(root.subfolders, vec!["Archive"]);
}

#[tokio::test]
async fn test_listing_separates_documents_from_subfolders() {
    let shelf = TestShelf::new();
    shelf.create_at("top.txt", &["Projects"]).await;
    shelf.create_at("nested.txt", &["Projects", "Alpha"]).await;
    shelf.create_at("nested2.txt", &["Projects", "Beta"]).await;

    let listing = shelf
        .store
        .list_by_path(&FolderPath::from_segments(["Projects"]))
        .await
        .unwrap();
    assert_eq!(listing.documents.len(), 1);
    assert_eq!(listing.documents[0].name, "top.txt");
    assert_eq!(listing.subfolders, vec!["Alpha", "Beta"]);
}

#[tokio::test]
async fn test_unknown_path_lists_empty() {
    let shelf = TestShelf::new();
    shelf.create_at("somewhere.txt", &["Here"]).await;

    let listing = shelf
        .store
        .list_by_path(&FolderPath::from_segments(["Nowhere"]))
        .await
        .unwrap();
    assert!(listing.documents.is_empty());
    assert!(listing.subfolders.is_empty());
}
