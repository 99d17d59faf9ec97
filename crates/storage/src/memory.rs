//! In-process storage backend.
//!
//! Used when no `DATABASE_URL` is configured and by tests. Enforces the same
//! unique-email rule as the PostgreSQL schema.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use waitlist_core::{EmailAddress, SignupRecord, VisitorRecord};

use crate::error::StorageError;
use crate::traits::{SignupStore, VisitorStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    signups: Arc<RwLock<HashMap<EmailAddress, SignupRecord>>>,
    visitors: Arc<RwLock<Vec<VisitorRecord>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn signup_count(&self) -> usize {
        self.signups.read().await.len()
    }

    pub async fn visitor_count(&self) -> usize {
        self.visitors.read().await.len()
    }

    /// Snapshot of recorded visitors in insertion order.
    pub async fn visitors(&self) -> Vec<VisitorRecord> {
        self.visitors.read().await.clone()
    }
}

#[async_trait]
impl SignupStore for MemoryStorage {
    async fn find_signup(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<SignupRecord>, StorageError> {
        Ok(self.signups.read().await.get(email).cloned())
    }

    async fn insert_signup(
        &self,
        email: &EmailAddress,
        project_name: &str,
    ) -> Result<SignupRecord, StorageError> {
        let mut signups = self.signups.write().await;
        if signups.contains_key(email) {
            return Err(StorageError::Duplicate(format!("signups.email = {email}")));
        }
        let record = SignupRecord::new(
            uuid::Uuid::new_v4().to_string(),
            email.clone(),
            project_name.to_owned(),
            Utc::now(),
        );
        signups.insert(email.clone(), record.clone());
        Ok(record)
    }
}

#[async_trait]
impl VisitorStore for MemoryStorage {
    async fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<(), StorageError> {
        self.visitors.write().await.push(visitor.clone());
        Ok(())
    }
}
