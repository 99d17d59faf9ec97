//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p waitlist-storage -- --ignored pg_

#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::Utc;
use uuid::Uuid;
use waitlist_core::{EmailAddress, VisitorRecord};
use waitlist_storage::traits::{SignupStore, VisitorStore};
use waitlist_storage::{PgStorage, StorageError};

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_email() -> EmailAddress {
    EmailAddress::parse(&format!("test-{}@Example.com", Uuid::new_v4())).unwrap()
}

#[tokio::test]
#[ignore]
async fn pg_migrations_are_idempotent() {
    let storage = create_pg_storage().await;
    storage.migrate().await.unwrap();
    storage.migrate().await.unwrap();
    storage.ping().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_insert_and_find_signup() {
    let storage = create_pg_storage().await;
    let email = unique_email();

    assert!(storage.find_signup(&email).await.unwrap().is_none());

    let inserted = storage.insert_signup(&email, "botvault").await.unwrap();
    let fetched = storage.find_signup(&email).await.unwrap().expect("signup should exist");
    assert_eq!(fetched.id, inserted.id);
    assert_eq!(fetched.email, email);
    assert_eq!(fetched.project_name, "botvault");
}

#[tokio::test]
#[ignore]
async fn pg_unique_index_rejects_second_insert() {
    let storage = create_pg_storage().await;
    let email = unique_email();

    storage.insert_signup(&email, "botvault").await.unwrap();
    let err = storage.insert_signup(&email, "botvault").await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)), "got {err:?}");
}

#[tokio::test]
#[ignore]
async fn pg_concurrent_inserts_keep_one_row() {
    let storage = create_pg_storage().await;
    let email = unique_email();

    let (a, b) = tokio::join!(
        storage.insert_signup(&email, "botvault"),
        storage.insert_signup(&email, "botvault"),
    );
    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1);
}

#[tokio::test]
#[ignore]
async fn pg_insert_visitor() {
    let storage = create_pg_storage().await;
    let visitor = VisitorRecord::new(
        Uuid::new_v4().to_string(),
        "https://botvault.example/?ref=pg-test",
        "pg-integration",
        "botvault".to_owned(),
        Utc::now(),
    );
    storage.insert_visitor(&visitor).await.unwrap();
}
