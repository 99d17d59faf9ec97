use std::sync::Arc;

use anyhow::{Context, Result};
use waitlist_core::WaitlistConfig;
use waitlist_service::VisitorTracker;
use waitlist_storage::StorageBackend;

pub(crate) async fn run(config: &WaitlistConfig, page_url: String, user_agent: String) -> Result<()> {
    let storage = StorageBackend::from_database_url(config.database_url.as_deref())
        .await
        .context("Failed to initialize storage")?;
    let tracker = VisitorTracker::new(Arc::new(storage), config.project_name.clone());

    // failures are logged by the tracker, never reported
    tracker.track(page_url, user_agent).await.context("visitor task panicked")?;
    Ok(())
}
