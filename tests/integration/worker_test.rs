//! Background maintenance wiring.

use std::sync::Arc;

use docshelf::AppConfig;

use crate::helpers::{TestShelf, days_ago};

#[tokio::test]
async fn test_sweep_on_start_purges_expired_trash() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Stale.txt", &[]).await;
    shelf.store.soft_delete(doc.id).await.unwrap();
    shelf.backdate_trash(doc.id, days_ago(45)).await;

    // Defaults: worker enabled, sweep on start, 30-day retention.
    let config = AppConfig::default();
    let scheduler = docshelf::start_maintenance(&config, Arc::new(shelf.store.clone()))
        .await
        .unwrap();
    let mut scheduler = scheduler.expect("worker should be running");

    assert!(shelf.store.list_trashed().await.unwrap().is_empty());
    scheduler.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_recent_trash_survives_the_start_sweep() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Fresh.txt", &[]).await;
    shelf.store.soft_delete(doc.id).await.unwrap();
    shelf.backdate_trash(doc.id, days_ago(5)).await;

    let config = AppConfig::default();
    let scheduler = docshelf::start_maintenance(&config, Arc::new(shelf.store.clone()))
        .await
        .unwrap();
    let mut scheduler = scheduler.expect("worker should be running");

    assert_eq!(shelf.store.list_trashed().await.unwrap().len(), 1);
    scheduler.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_disabled_worker_starts_nothing() {
    let shelf = TestShelf::new();
    let mut config = AppConfig::default();
    config.worker.enabled = false;

    let handle = docshelf::start_maintenance(&config, Arc::new(shelf.store.clone()))
        .await
        .unwrap();
    assert!(handle.is_none());
}

#[tokio::test]
async fn test_start_sweep_can_be_disabled() {
    let shelf = TestShelf::new();
    let doc = shelf.create_at("Stale.txt", &[]).await;
    shelf.store.soft_delete(doc.id).await.unwrap();
    shelf.backdate_trash(doc.id, days_ago(45)).await;

    let mut config = AppConfig::default();
    config.worker.sweep_on_start = false;

    let scheduler = docshelf::start_maintenance(&config, Arc::new(shelf.store.clone()))
        .await
        .unwrap();
    let mut scheduler = scheduler.expect("worker should be running");

    // Nothing ran yet; the expired document waits for the schedule.
    assert_eq!(shelf.store.list_trashed().await.unwrap().len(), 1);
    scheduler.shutdown().await.unwrap();
}
