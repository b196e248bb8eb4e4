//! Storage-specific error type wrapping sqlx errors.

use autoclearskies_domain::error::AutoClearSkiesError;

/// Errors originating from the `PostgreSQL` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query, connection, or pool acquisition failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for AutoClearSkiesError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
