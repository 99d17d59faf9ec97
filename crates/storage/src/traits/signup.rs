use async_trait::async_trait;
use waitlist_core::{EmailAddress, SignupRecord};

use crate::error::StorageError;

/// Waitlist signup operations.
#[async_trait]
pub trait SignupStore: Send + Sync {
    /// Existence check: at most one signup whose email equals `email`.
    async fn find_signup(&self, email: &EmailAddress)
    -> Result<Option<SignupRecord>, StorageError>;

    /// Insert a new signup.
    ///
    /// Returns [`StorageError::Duplicate`] when the email is already stored,
    /// even if a preceding [`find_signup`](Self::find_signup) saw nothing.
    async fn insert_signup(
        &self,
        email: &EmailAddress,
        project_name: &str,
    ) -> Result<SignupRecord, StorageError>;
}
