//! Schema setup command.
//!
//! Applies the idempotent PostgreSQL migrations at `DATABASE_URL`.

use anyhow::{Context, Result};
use waitlist_core::WaitlistConfig;
use waitlist_storage::PgStorage;

pub(crate) async fn run(config: &WaitlistConfig) -> Result<()> {
    let url = config
        .database_url
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set for migrate"))?;

    let storage = PgStorage::connect(url).await.context("Failed to connect to PostgreSQL")?;
    storage.migrate().await?;
    println!("Migration complete!");
    Ok(())
}
