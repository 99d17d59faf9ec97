//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table.

mod signups;
mod visitors;

use std::time::Duration;

use crate::error::StorageError;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use waitlist_core::{
    EmailAddress, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, SignupRecord,
};

use super::pg_migrations::run_pg_migrations;

const SIGNUP_COLUMNS: &str = "id, email, project_name, created_at";

const VISITOR_COLUMNS: &str = "id, page_url, user_agent, project_name, created_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and bring the schema up to date.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let storage = Self::connect(database_url).await?;
        storage.migrate().await?;
        tracing::info!("PgStorage initialized");
        Ok(storage)
    }

    /// Connect without running migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| StorageError::Migration(e.to_string()))
    }

    /// Round-trip a trivial query; used by readiness checks.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub(crate) fn row_to_signup(row: &sqlx::postgres::PgRow) -> Result<SignupRecord, StorageError> {
    let raw_email: String = row.try_get("email")?;
    let email = EmailAddress::parse(&raw_email).map_err(|e| StorageError::DataCorruption {
        context: format!("stored email {raw_email:?} fails validation"),
        source: Box::new(e),
    })?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(SignupRecord::new(row.try_get("id")?, email, row.try_get("project_name")?, created_at))
}
