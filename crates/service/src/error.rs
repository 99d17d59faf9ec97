//! Typed error enum for the service layer.
//!
//! Folds validation and storage failures into the four user-facing signup
//! outcomes, so handlers can pick a notice and status without inspecting
//! storage internals.

use thiserror::Error;
use waitlist_core::{CoreError, EmailAddress, FailureStage, Notice, SignupErrorKind};
use waitlist_storage::StorageError;

/// Service-layer error for a signup attempt.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input is empty or not shaped like `local@domain.tld`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Email is already on the waitlist.
    #[error("email already registered: {0}")]
    DuplicateEmail(EmailAddress),

    /// Storage could not serve the lookup or the insert.
    #[error("persistence unavailable during {stage:?}: {source}")]
    PersistenceUnavailable {
        stage: FailureStage,
        #[source]
        source: StorageError,
    },

    /// Storage answered with something that should not exist (corrupt row).
    #[error("unexpected storage failure during {stage:?}: {source}")]
    Unexpected {
        stage: FailureStage,
        #[source]
        source: StorageError,
    },
}

impl ServiceError {
    /// Classify a storage failure raised while handling `email`.
    pub(crate) fn from_storage(
        stage: FailureStage,
        email: &EmailAddress,
        source: StorageError,
    ) -> Self {
        if stage == FailureStage::Insert && source.is_duplicate() {
            return Self::DuplicateEmail(email.clone());
        }
        if source.is_corruption() {
            return Self::Unexpected { stage, source };
        }
        Self::PersistenceUnavailable { stage, source }
    }

    #[must_use]
    pub const fn kind(&self) -> SignupErrorKind {
        match self {
            Self::InvalidInput(_) => SignupErrorKind::InvalidInput,
            Self::DuplicateEmail(_) => SignupErrorKind::DuplicateEmail,
            Self::PersistenceUnavailable { .. } => SignupErrorKind::PersistenceUnavailable,
            Self::Unexpected { .. } => SignupErrorKind::Unexpected,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> Option<FailureStage> {
        match self {
            Self::PersistenceUnavailable { stage, .. } | Self::Unexpected { stage, .. } => {
                Some(*stage)
            },
            Self::InvalidInput(_) | Self::DuplicateEmail(_) => None,
        }
    }

    /// Notice to show the submitter.
    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::signup_failure(self.kind(), self.stage())
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waitlist_core::{MSG_DUPLICATE_EMAIL, MSG_INSERT_FAILED, MSG_REGISTRATION_FAILED};

    fn addr() -> EmailAddress {
        EmailAddress::parse("x@y.com").unwrap()
    }

    #[test]
    fn test_duplicate_on_insert_becomes_duplicate_email() {
        let err = ServiceError::from_storage(
            FailureStage::Insert,
            &addr(),
            StorageError::Duplicate("idx_signups_email".into()),
        );
        assert_eq!(err.kind(), SignupErrorKind::DuplicateEmail);
        assert_eq!(err.notice().message, MSG_DUPLICATE_EMAIL);
    }

    #[test]
    fn test_insert_failure_is_persistence_unavailable() {
        let err = ServiceError::from_storage(
            FailureStage::Insert,
            &addr(),
            StorageError::Unavailable("connection refused".into()),
        );
        assert_eq!(err.kind(), SignupErrorKind::PersistenceUnavailable);
        assert_eq!(err.stage(), Some(FailureStage::Insert));
        assert_eq!(err.notice().message, MSG_INSERT_FAILED);
    }

    #[test]
    fn test_lookup_failure_reads_as_registration_failed() {
        let err = ServiceError::from_storage(
            FailureStage::Lookup,
            &addr(),
            StorageError::Unavailable("timeout".into()),
        );
        assert_eq!(err.notice().message, MSG_REGISTRATION_FAILED);
    }

    #[test]
    fn test_corruption_is_unexpected() {
        let source = StorageError::DataCorruption {
            context: "bad row".into(),
            source: Box::new(CoreError::InvalidEmail("nope".into())),
        };
        let err = ServiceError::from_storage(FailureStage::Lookup, &addr(), source);
        assert_eq!(err.kind(), SignupErrorKind::Unexpected);
        assert_eq!(err.stage(), Some(FailureStage::Lookup));
    }

    #[test]
    fn test_core_error_is_invalid_input() {
        let err = ServiceError::from(CoreError::InvalidEmail("empty input".into()));
        assert_eq!(err.kind(), SignupErrorKind::InvalidInput);
        assert_eq!(err.stage(), None);
    }
}
