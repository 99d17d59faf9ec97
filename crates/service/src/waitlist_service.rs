use std::sync::Arc;

use waitlist_core::{EmailAddress, FailureStage, SignupRecord};
use waitlist_storage::SignupStore;

use crate::error::ServiceError;

/// Validates, de-duplicates, and stores waitlist signups.
pub struct WaitlistService {
    signups: Arc<dyn SignupStore>,
    project_name: String,
}

impl WaitlistService {
    #[must_use]
    pub fn new(signups: Arc<dyn SignupStore>, project_name: impl Into<String>) -> Self {
        Self { signups, project_name: project_name.into() }
    }

    #[must_use]
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Handle one form submission.
    ///
    /// Invalid input returns before any storage call. A duplicate found by
    /// the lookup skips the insert; a duplicate rejected by the insert itself
    /// (two submitters racing on one address) is reported the same way.
    pub async fn submit(&self, raw_email: &str) -> Result<SignupRecord, ServiceError> {
        let email = EmailAddress::parse(raw_email).inspect_err(|e| {
            tracing::debug!(error = %e, "signup rejected: invalid email");
        })?;

        let existing = self
            .signups
            .find_signup(&email)
            .await
            .map_err(|e| ServiceError::from_storage(FailureStage::Lookup, &email, e))
            .inspect_err(|e| tracing::error!(error = %e, "duplicate check failed"))?;
        if existing.is_some() {
            tracing::debug!(email = %email, "signup rejected: already registered");
            return Err(ServiceError::DuplicateEmail(email));
        }

        match self.signups.insert_signup(&email, &self.project_name).await {
            Ok(record) => {
                tracing::info!(
                    id = %record.id,
                    domain = email.domain(),
                    project = %self.project_name,
                    "waitlist signup stored"
                );
                Ok(record)
            },
            Err(e) => {
                let err = ServiceError::from_storage(FailureStage::Insert, &email, e);
                if matches!(err, ServiceError::DuplicateEmail(_)) {
                    tracing::debug!(email = %email, "signup lost insert race, already registered");
                } else {
                    tracing::error!(error = %err, "failed to save signup");
                }
                Err(err)
            },
        }
    }
}
