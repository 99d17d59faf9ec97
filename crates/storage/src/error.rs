//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (duplicate, corrupt rows) instead
//! of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation (email already registered).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Backend cannot be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether the stored data itself is bad, as opposed to the backend failing.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::DataCorruption { .. })
    }
}

/// Custom `From<sqlx::Error>`: NOT blanket `#[from]`.
///
/// - SQLSTATE 23505 → `Duplicate`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                Self::Duplicate(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_plain_database_error() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Database(sqlx::Error::RowNotFound)));
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_pool_timeout_is_database_error() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StorageError::Database(_)));
        assert!(!err.is_corruption());
    }

    #[test]
    fn test_duplicate_flags() {
        let err = StorageError::Duplicate("signups_email_key".into());
        assert!(err.is_duplicate());
        assert!(!err.is_corruption());
    }
}
