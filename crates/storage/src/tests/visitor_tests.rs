use super::create_test_visitor;
use crate::memory::MemoryStorage;
use crate::traits::VisitorStore;

#[tokio::test]
async fn test_visitors_append() {
    let storage = MemoryStorage::new();
    storage.insert_visitor(&create_test_visitor("v1")).await.unwrap();
    storage.insert_visitor(&create_test_visitor("v2")).await.unwrap();
    assert_eq!(storage.visitor_count().await, 2);
}

#[tokio::test]
async fn test_repeat_visits_are_not_deduplicated() {
    let storage = MemoryStorage::new();
    let visit = create_test_visitor("v1");
    storage.insert_visitor(&visit).await.unwrap();
    storage.insert_visitor(&visit).await.unwrap();
    assert_eq!(storage.visitor_count().await, 2);
}

#[tokio::test]
async fn test_visitors_snapshot_keeps_insertion_order() {
    let storage = MemoryStorage::new();
    storage.insert_visitor(&create_test_visitor("v2")).await.unwrap();
    storage.insert_visitor(&create_test_visitor("v1")).await.unwrap();
    let ids: Vec<String> = storage.visitors().await.into_iter().map(|v| v.id).collect();
    assert_eq!(ids, ["v2", "v1"]);
}
