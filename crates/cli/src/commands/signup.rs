use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use waitlist_core::WaitlistConfig;
use waitlist_service::{SignupForm, SubmitOutcome, WaitlistService};
use waitlist_storage::StorageBackend;

pub(crate) async fn run(config: &WaitlistConfig, email: String) -> Result<()> {
    let storage = StorageBackend::from_database_url(config.database_url.as_deref())
        .await
        .context("Failed to initialize storage")?;
    let service = WaitlistService::new(Arc::new(storage), config.project_name.clone());

    let mut form = SignupForm::new(config);
    form.set_input(email);
    let now = Instant::now();
    let outcome = form.submit(&service, now).await;

    let notice = form
        .notice(now)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("signup produced no notice"))?;
    println!("{}", serde_json::to_string_pretty(&notice)?);

    match outcome {
        SubmitOutcome::Registered(record) => {
            tracing::debug!(id = %record.id, "registered");
            Ok(())
        },
        SubmitOutcome::Rejected(kind) => anyhow::bail!("{kind}: {}", notice.message),
        SubmitOutcome::Suppressed { .. } => anyhow::bail!("submit suppressed"),
    }
}
