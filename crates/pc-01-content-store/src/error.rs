//! Error types for the Content Store subsystem

use thiserror::Error;

/// Content Store subsystem errors
#[derive(Debug, Error)]
pub enum ContentStoreError {
    /// Caller supplied an unusable argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Result type for content store operations
pub type ContentStoreResult<T> = Result<T, ContentStoreError>;
