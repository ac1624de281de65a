//! Error types for the Provenance Ledger subsystem

use thiserror::Error;

/// Provenance Ledger subsystem errors
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Registration is create-once; the batch identifier already exists
    #[error("Batch already registered: {batch_id}")]
    AlreadyRegistered { batch_id: String },

    /// The batch identifier has no explicit record
    #[error("Batch not found: {batch_id}")]
    NotFound { batch_id: String },

    /// Caller supplied an unusable argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
