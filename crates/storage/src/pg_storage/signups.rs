//! SignupStore implementation for PgStorage.

use super::*;

use crate::traits::SignupStore;
use async_trait::async_trait;

#[async_trait]
impl SignupStore for PgStorage {
    async fn find_signup(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<SignupRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {SIGNUP_COLUMNS} FROM signups WHERE email = $1 LIMIT 1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_signup(&r)).transpose()
    }

    async fn insert_signup(
        &self,
        email: &EmailAddress,
        project_name: &str,
    ) -> Result<SignupRecord, StorageError> {
        let record = SignupRecord::new(
            uuid::Uuid::new_v4().to_string(),
            email.clone(),
            project_name.to_owned(),
            Utc::now(),
        );
        // 23505 on idx_signups_email surfaces as StorageError::Duplicate
        sqlx::query(&format!("INSERT INTO signups ({SIGNUP_COLUMNS}) VALUES ($1, $2, $3, $4)"))
            .bind(&record.id)
            .bind(record.email.as_str())
            .bind(&record.project_name)
            .bind(record.created_at)
            .execute(&self.pool)
            .await?;
        Ok(record)
    }
}
