//! Errors reported by the alias store.
//!
//! Storage implementations translate their driver errors into [`StoreError`]
//! before returning, so callers never see engine-specific error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("alias already exists: {0}")]
    AliasExists(String),
    #[error("alias not found: {0}")]
    AliasNotFound(String),
    #[error("alias {0} belongs to another user")]
    WrongUser(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Io(String),
}

impl StoreError {
    /// Returns true for failures of the storage backend itself rather than
    /// outcomes of the requested operation.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Io(_))
    }
}
