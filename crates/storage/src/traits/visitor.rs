use async_trait::async_trait;
use waitlist_core::VisitorRecord;

use crate::error::StorageError;

/// Page-view analytics. Write-only.
#[async_trait]
pub trait VisitorStore: Send + Sync {
    async fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<(), StorageError>;
}
