//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AutoClearSkiesError`] via `From`, so the HTTP adapter only has one type
//! to map onto status codes.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum AutoClearSkiesError {
    /// The caller supplied something that could not be accepted.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed (connection, pool, or query).
    #[error("storage error: {0}")]
    Storage(#[source] BoxError),

    /// A dependency is not reachable right now.
    #[error("service unavailable: {0}")]
    Unavailable(#[source] BoxError),
}

/// Reasons an incoming measurement is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The request body could not be decoded into a measurement.
    #[error("malformed measurement payload: {0}")]
    MalformedPayload(String),

    /// The request body exceeded the accepted size.
    #[error("measurement payload too large")]
    PayloadTooLarge,
}
