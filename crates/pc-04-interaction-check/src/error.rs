//! Error types for the Interaction Check subsystem

use thiserror::Error;

/// Interaction Check subsystem errors
#[derive(Debug, Error)]
pub enum InteractionError {
    /// Caller supplied an unusable argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Result type for interaction check operations
pub type InteractionResult<T> = Result<T, InteractionError>;
