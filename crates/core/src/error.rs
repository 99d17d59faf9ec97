use std::result::Result as StdResult;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by core validation and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = StdResult<T, CoreError>;

/// User-facing classification of a failed signup.
///
/// Every layer's error maps onto exactly one of these, which in turn decides
/// the notice text and the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupErrorKind {
    InvalidInput,
    DuplicateEmail,
    PersistenceUnavailable,
    Unexpected,
}

impl SignupErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::DuplicateEmail => "duplicate_email",
            Self::PersistenceUnavailable => "persistence_unavailable",
            Self::Unexpected => "unexpected",
        }
    }

    /// Terminal kinds are caused by the submitted value itself; resubmitting
    /// the same input cannot succeed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::InvalidInput | Self::DuplicateEmail)
    }
}

impl std::fmt::Display for SignupErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_kinds() {
        assert!(SignupErrorKind::InvalidInput.is_terminal());
        assert!(SignupErrorKind::DuplicateEmail.is_terminal());
        assert!(!SignupErrorKind::PersistenceUnavailable.is_terminal());
        assert!(!SignupErrorKind::Unexpected.is_terminal());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SignupErrorKind::DuplicateEmail).unwrap();
        assert_eq!(json, "\"duplicate_email\"");
        assert_eq!(SignupErrorKind::PersistenceUnavailable.to_string(), "persistence_unavailable");
    }
}
