//! Store operations against the HTTP collection endpoint.

mod common;

use common::server::TestServer;
use common::{free_port, http_store};
use feedback_board::feedback::{FeedbackDraft, FeedbackId, FeedbackPatch, Rating};
use feedback_board::store::{EditSlot, StoreError};

#[tokio::test]
async fn load_lists_newest_first() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());

    store.load().await.unwrap();

    let state = store.snapshot();
    let ids: Vec<_> = state.records.iter().map(|r| r.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            FeedbackId::Number(3),
            FeedbackId::Number(2),
            FeedbackId::Number(1)
        ]
    );
    assert!(!state.is_loading);
    assert_eq!(state.stats().count_label(), "3 Reviews");
    assert_eq!(state.stats().average_label(), "7.7");
}

#[tokio::test]
async fn add_prepends_server_record() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    let record = store
        .add(FeedbackDraft::new("Great service", 6))
        .await
        .unwrap();

    assert_eq!(record.id, FeedbackId::Number(4));
    let state = store.snapshot();
    assert_eq!(state.records[0], record);
    assert_eq!(state.len(), 4);
    assert_eq!(state.stats().average_label(), "7.3");
    assert_eq!(server.collection().len(), 4);
}

#[tokio::test]
async fn invalid_add_never_reaches_server() {
    let server = TestServer::empty().await;
    let store = http_store(&server.base_url());

    let err = store.add(FeedbackDraft::new("   ", 5)).await.unwrap_err();

    assert!(matches!(err, StoreError::Validation(_)));
    assert!(server.collection().is_empty());
    assert!(store.snapshot().is_empty());
}

#[tokio::test]
async fn confirmed_delete_removes_everywhere() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    let removed = store.delete(&FeedbackId::Number(2), true).await.unwrap();

    assert!(removed);
    assert!(!store.snapshot().contains(&FeedbackId::Number(2)));
    assert!(server.collection().get(&FeedbackId::Number(2)).is_none());
}

#[tokio::test]
async fn unconfirmed_delete_keeps_record() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    let removed = store.delete(&FeedbackId::Number(2), false).await.unwrap();

    assert!(!removed);
    assert_eq!(store.snapshot().len(), 3);
    assert_eq!(server.collection().len(), 3);
}

#[tokio::test]
async fn update_merges_and_clears_edit_slot() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    let target = store.snapshot().find(&FeedbackId::Number(1)).cloned().unwrap();
    store.edit_feedback(&target);
    assert!(store.snapshot().edit.is_editing());

    let patch = FeedbackPatch::default().with_rating(Rating::new(2).unwrap());
    let record = store.update(&FeedbackId::Number(1), patch).await.unwrap();

    assert_eq!(record.text, target.text);
    assert_eq!(record.rating.get(), 2);
    let state = store.snapshot();
    assert_eq!(state.edit, EditSlot::Idle);
    assert_eq!(state.find(&FeedbackId::Number(1)), Some(&record));
    assert_eq!(server.collection().get(&FeedbackId::Number(1)), Some(record));
}

#[tokio::test]
async fn update_of_record_deleted_remotely_is_not_found() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    let target = store.snapshot().find(&FeedbackId::Number(3)).cloned().unwrap();
    store.edit_feedback(&target);
    assert!(server.collection().remove(&FeedbackId::Number(3)));

    let patch = FeedbackPatch::default().with_text("too late");
    let err = store
        .update(&FeedbackId::Number(3), patch)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }));
    let state = store.snapshot();
    assert_eq!(state.edit, EditSlot::Idle);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn delete_of_record_deleted_remotely_converges() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();
    assert!(server.collection().remove(&FeedbackId::Number(1)));

    let removed = store.delete(&FeedbackId::Number(1), true).await.unwrap();

    assert!(removed);
    assert!(!store.snapshot().contains(&FeedbackId::Number(1)));
}

#[tokio::test]
async fn unreachable_collection_keeps_snapshot() {
    let store = http_store(&format!("http://127.0.0.1:{}", free_port()));

    let err = store.load().await.unwrap_err();

    assert!(matches!(err, StoreError::Transport(_)));
    let state = store.snapshot();
    assert!(state.is_empty());
    assert!(!state.is_loading);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn reload_replaces_local_state() {
    let server = TestServer::start().await;
    let store = http_store(&server.base_url());
    store.load().await.unwrap();

    assert!(server.collection().remove(&FeedbackId::Number(3)));
    store.load().await.unwrap();

    assert_eq!(store.snapshot().len(), 2);
    assert_eq!(store.snapshot().records[0].id, FeedbackId::Number(2));
}
