//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use waitlist_core::{EmailAddress, SignupRecord, VisitorRecord};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::{SignupStore, VisitorStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    /// Pick PostgreSQL when a URL is configured, otherwise fall back to memory.
    pub async fn from_database_url(database_url: Option<&str>) -> Result<Self, StorageError> {
        match database_url {
            Some(url) => Self::new_postgres(url).await,
            None => {
                tracing::warn!("DATABASE_URL not set, signups are kept in memory only");
                Ok(Self::new_memory())
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    pub async fn ping(&self) -> Result<(), StorageError> {
        match self {
            Self::Postgres(s) => s.ping().await,
            Self::Memory(_) => Ok(()),
        }
    }
}

// ── SignupStore ──────────────────────────────────────────────────

#[async_trait]
impl SignupStore for StorageBackend {
    async fn find_signup(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<SignupRecord>, StorageError> {
        dispatch!(self, SignupStore, find_signup(email))
    }

    async fn insert_signup(
        &self,
        email: &EmailAddress,
        project_name: &str,
    ) -> Result<SignupRecord, StorageError> {
        dispatch!(self, SignupStore, insert_signup(email, project_name))
    }
}

// ── VisitorStore ─────────────────────────────────────────────────

#[async_trait]
impl VisitorStore for StorageBackend {
    async fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<(), StorageError> {
        dispatch!(self, VisitorStore, insert_visitor(visitor))
    }
}
