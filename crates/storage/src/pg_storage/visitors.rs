//! VisitorStore implementation for PgStorage.

use super::*;

use crate::traits::VisitorStore;
use async_trait::async_trait;
use waitlist_core::VisitorRecord;

#[async_trait]
impl VisitorStore for PgStorage {
    async fn insert_visitor(&self, visitor: &VisitorRecord) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO visitors ({VISITOR_COLUMNS}) VALUES ($1, $2, $3, $4, $5)"
        ))
        .bind(&visitor.id)
        .bind(&visitor.page_url)
        .bind(&visitor.user_agent)
        .bind(&visitor.project_name)
        .bind(visitor.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
