// Rust guideline compliant 2026-02-06

//! Integration tests for the queue store.

use ayuda_core::{seed, Error, QueueStatus, QueueStore};

fn seeded() -> QueueStore {
    QueueStore::new(seed::queue_entries()).expect("seed queue is valid")
}

fn status_of(store: &QueueStore, id: &str) -> QueueStatus {
    store.get(id).expect("entry exists").status
}

#[test]
fn test_seed_has_one_server() {
    let store = seeded();
    assert_eq!(store.serving_count(), 1);
    assert_eq!(store.waiting_count(), 4);
    assert_eq!(store.serving().map(|e| e.display_number), Some(101));
}

#[test]
fn test_promote_demotes_current_server() {
    let mut store = seeded();
    store.promote("3").unwrap();

    assert_eq!(status_of(&store, "1"), QueueStatus::Waiting);
    assert_eq!(status_of(&store, "3"), QueueStatus::Serving);
    assert_eq!(store.serving_count(), 1);
}

#[test]
fn test_promote_current_server_is_noop() {
    let mut store = seeded();
    let before = store.visible().to_vec();
    store.promote("1").unwrap();
    assert_eq!(store.visible(), before.as_slice());
}

#[test]
fn test_promote_unknown_leaves_queue_unchanged() {
    let mut store = seeded();
    let before = store.visible().to_vec();
    let result = store.promote("missing");
    assert!(matches!(result, Err(Error::NotFound(ref id)) if id == "missing"));
    assert_eq!(store.visible(), before.as_slice());
}

#[test]
fn test_remove_then_promote_is_noop() {
    let mut store = seeded();
    let removed = store.remove("2").unwrap();
    assert_eq!(removed.name, "Juan Cruz");

    let before = store.visible().to_vec();
    assert!(matches!(store.promote("2"), Err(Error::NotFound(_))));
    assert_eq!(store.visible(), before.as_slice());
}

#[test]
fn test_remove_serving_entry_leaves_no_server() {
    let mut store = seeded();
    store.remove("1").unwrap();
    assert_eq!(store.serving_count(), 0);
    assert!(store.serving().is_none());
}

#[test]
fn test_complete_moves_entry_to_completed_list() {
    let mut store = seeded();
    let completed = store.complete("1").unwrap();
    assert_eq!(completed.entry.id, "1");
    assert_eq!(completed.entry.status, QueueStatus::Completed);

    assert!(store.get("1").is_none(), "completed entry leaves the live queue");
    assert_eq!(store.completed().len(), 1);
    assert_eq!(store.visible().len(), 4);
    assert_eq!(store.serving_count(), 0);
}

#[test]
fn test_complete_waiting_entry_rejected() {
    let mut store = seeded();
    let result = store.complete("2");
    assert!(matches!(result, Err(Error::InvalidTransition(_))));
    assert_eq!(status_of(&store, "2"), QueueStatus::Waiting);
    assert!(store.completed().is_empty());
}

#[test]
fn test_complete_twice_reports_not_found() {
    let mut store = seeded();
    store.complete("1").unwrap();
    assert!(matches!(store.complete("1"), Err(Error::NotFound(_))));
    assert_eq!(store.completed().len(), 1);
}

#[test]
fn test_call_next_serves_first_waiting() {
    let mut store = seeded();
    store.complete("1").unwrap();

    let next = store.call_next().unwrap().map(|e| e.id.clone());
    assert_eq!(next.as_deref(), Some("2"));
    assert_eq!(status_of(&store, "2"), QueueStatus::Serving);
}

#[test]
fn test_call_next_with_empty_queue() {
    let mut store = QueueStore::default();
    assert!(store.call_next().unwrap().is_none());
}

#[test]
fn test_full_day_drains_queue() {
    let mut store = seeded();
    store.complete("1").unwrap();
    while let Some(id) = store.call_next().unwrap().map(|e| e.id.clone()) {
        store.complete(&id).unwrap();
    }
    assert!(store.visible().is_empty());
    assert_eq!(store.completed().len(), 5);
    let order: Vec<u32> = store
        .completed()
        .iter()
        .map(|c| c.entry.display_number)
        .collect();
    assert_eq!(order, vec![101, 102, 103, 104, 105]);
}
