use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use waitlist_core::VisitorRecord;
use waitlist_storage::VisitorStore;

/// Fire-and-forget page-view recording.
///
/// Failures are logged and dropped: never surfaced, never retried.
#[derive(Clone)]
pub struct VisitorTracker {
    visitors: Arc<dyn VisitorStore>,
    project_name: String,
}

impl VisitorTracker {
    #[must_use]
    pub fn new(visitors: Arc<dyn VisitorStore>, project_name: impl Into<String>) -> Self {
        Self { visitors, project_name: project_name.into() }
    }

    /// Spawn the insert and return immediately.
    ///
    /// The handle is only useful to callers that want to wait (CLI, tests);
    /// dropping it does not cancel the write.
    pub fn track(&self, page_url: String, user_agent: String) -> JoinHandle<()> {
        let tracker = self.clone();
        tokio::spawn(async move { tracker.record(&page_url, &user_agent).await })
    }

    /// Insert one visitor record, swallowing any failure.
    pub async fn record(&self, page_url: &str, user_agent: &str) {
        let visitor = VisitorRecord::new(
            uuid::Uuid::new_v4().to_string(),
            page_url,
            user_agent,
            self.project_name.clone(),
            Utc::now(),
        );
        match self.visitors.insert_visitor(&visitor).await {
            Ok(()) => {
                tracing::debug!(id = %visitor.id, page_url = %visitor.page_url, "visitor tracked");
            },
            Err(e) => {
                tracing::warn!(error = %e, page_url = %visitor.page_url, "Error tracking visitor");
            },
        }
    }
}
