use std::time::Duration;

use crate::services::verification::{ExpiringKeyValueStore, InMemoryKeyValueStore};

#[tokio::test(start_paused = true)]
async fn test_entries_expire() {
    let store = InMemoryKeyValueStore::new();
    store.set("k", "v", Duration::from_secs(10)).await.unwrap();

    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    tokio::time::advance(Duration::from_secs(10)).await;
    assert_eq!(store.get("k").await.unwrap(), None);
    assert_eq!(store.ttl("k").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_set_if_absent_respects_live_entry() {
    let store = InMemoryKeyValueStore::new();
    assert!(store.set_if_absent("k", "first", Duration::from_secs(5)).await.unwrap());
    assert!(!store.set_if_absent("k", "second", Duration::from_secs(5)).await.unwrap());
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("first"));

    tokio::time::advance(Duration::from_secs(6)).await;
    assert!(store.set_if_absent("k", "third", Duration::from_secs(5)).await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_ttl_counts_down() {
    let store = InMemoryKeyValueStore::new();
    store.set("k", "v", Duration::from_secs(120)).await.unwrap();
    tokio::time::advance(Duration::from_secs(30)).await;
    assert_eq!(store.ttl("k").await.unwrap(), Some(Duration::from_secs(90)));
}

#[tokio::test]
async fn test_delete_reports_presence() {
    let store = InMemoryKeyValueStore::new();
    store.set("k", "v", Duration::from_secs(60)).await.unwrap();
    assert!(store.delete("k").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
}
