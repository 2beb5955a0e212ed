//! Document lifecycle: create, edit, trash, restore, purge, sweep.

use docshelf::FolderPath;

use crate::helpers::{TestShelf, days_ago, make_doc};

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let shelf = TestShelf::new();
    let created = shelf.create_at("Notes.txt", &["Coursework"]).await;

    let fetched = shelf.store.get_document(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Notes.txt");
    assert_eq!(fetched.path, FolderPath::from_segments(["Coursework"]));
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.modified_at, created.modified_at);
}

#[tokio::test]
async fn test_edits_bump_modified_at_but_not_created_at() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Draft.txt", &[]).await;

    let after_content = shelf
        .store
        .update_content(doc.id, "first draft".to_string())
        .await
        .unwrap();
    assert!(after_content.modified_at > doc.modified_at);
    assert_eq!(after_content.created_at, doc.created_at);

    let after_star = shelf.store.toggle_star(doc.id).await.unwrap();
    assert!(after_star.starred);
    assert!(after_star.modified_at > after_content.modified_at);
}

#[tokio::test]
async fn test_soft_delete_hides_document_everywhere_but_trash() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Old Report.pdf", &["Reports"]).await;
    shelf.store.soft_delete(doc.id).await.unwrap();

    assert!(shelf.store.list_all().await.unwrap().is_empty());
    assert!(shelf.store.search("report").await.unwrap().is_empty());
    let listing = shelf
        .store
        .list_by_path(&FolderPath::from_segments(["Reports"]))
        .await
        .unwrap();
    assert!(listing.documents.is_empty());

    let trashed = shelf.store.list_trashed().await.unwrap();
    assert_eq!(trashed.len(), 1);
    assert!(trashed[0].deleted_at.is_some());
    // Trashing is not an edit.
    assert_eq!(trashed[0].modified_at, doc.modified_at);
}

#[tokio::test]
async fn test_restore_clears_deletion_and_stamps_modified_at() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Thesis.pdf", &["Research"]).await;

    shelf.store.soft_delete(doc.id).await.unwrap();
    shelf.store.restore(doc.id).await.unwrap();

    let restored = shelf.store.get_document(doc.id).await.unwrap();
    assert!(restored.deleted_at.is_none());
    assert!(restored.modified_at > doc.modified_at);
    assert_eq!(restored.path, doc.path);
    assert!(shelf.store.list_trashed().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_purge_is_permanent_and_idempotent() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Scratch.txt", &[]).await;
    shelf.store.soft_delete(doc.id).await.unwrap();

    assert!(shelf.store.purge(doc.id).await.unwrap());
    assert!(!shelf.store.purge(doc.id).await.unwrap());

    // Once purged, the document cannot come back.
    let err = shelf.store.restore(doc.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_purge_never_touches_live_documents() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Keep.txt", &[]).await;

    // Not in the trash, so nothing to purge.
    assert!(!shelf.store.purge(doc.id).await.unwrap());
    assert!(shelf.store.get_document(doc.id).await.is_ok());
}

#[tokio::test]
async fn test_sweep_respects_the_retention_boundary() {
    let shelf = TestShelf::new();
    let boundary = shelf.create_at("Boundary.txt", &[]).await;
    let expired = shelf.create_at("Expired.txt", &[]).await;
    shelf.store.soft_delete(boundary.id).await.unwrap();
    shelf.store.soft_delete(expired.id).await.unwrap();

    // Deleted exactly 30 days ago: still inside the window.
    shelf.backdate_trash(boundary.id, days_ago(30)).await;
    shelf.backdate_trash(expired.id, days_ago(31)).await;

    let purged = shelf.store.sweep_expired(30).await.unwrap();
    assert_eq!(purged, 1);

    let trashed = shelf.store.list_trashed().await.unwrap();
    assert_eq!(trashed.len(), 1);
    assert_eq!(trashed[0].id, boundary.id);

    // Nothing left to purge; the sweep reports zero.
    assert_eq!(shelf.store.sweep_expired(30).await.unwrap(), 0);
}

#[tokio::test]
async fn test_binary_content_round_trips_as_data_url() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("figure.png", &["Figures"]).await;

    let payload = docshelf::data_url("image/png", b"\x89PNG\r\n");
    shelf
        .store
        .update_content(doc.id, payload.clone())
        .await
        .unwrap();

    let fetched = shelf.store.get_document(doc.id).await.unwrap();
    let content = fetched.content.expect("content set");
    assert!(docshelf::is_data_url(&content));

    let (mime_type, bytes) = docshelf::parse_data_url(&content).expect("well-formed data URL");
    assert_eq!(mime_type, "image/png");
    assert_eq!(bytes, b"\x89PNG\r\n");
}

#[tokio::test]
async fn test_listings_filter_star_tag_and_recency() {
    let shelf = TestShelf::new();
    let tags = shelf.store.tags().ensure_defaults().await.unwrap();
    let research = tags[0].id;

    let a = shelf.create_at("a.txt", &[]).await;
    let b = shelf.create_at("b.txt", &[]).await;
    shelf.store.toggle_star(a.id).await.unwrap();

    let mut with_tag = make_doc("tagged.txt", &[]);
    with_tag.tags = vec![research];
    let tagged = shelf.store.create(with_tag).await.unwrap();

    let starred = shelf.store.list_starred().await.unwrap();
    assert_eq!(starred.len(), 1);
    assert_eq!(starred[0].id, a.id);

    let by_tag = shelf.store.list_by_tag(research).await.unwrap();
    assert_eq!(by_tag.len(), 1);
    assert_eq!(by_tag[0].id, tagged.id);

    // Tagged doc is newest, then the starred edit of a, then b.
    let recent = shelf.store.list_recent(2).await.unwrap();
    assert_eq!(recent[0].id, tagged.id);
    assert_eq!(recent[1].id, a.id);
    let _ = b;
}
