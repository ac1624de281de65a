//! Error types for the Redemption Registry subsystem

use thiserror::Error;

/// Redemption Registry subsystem errors
#[derive(Debug, Error)]
pub enum RedemptionError {
    /// The token has already been consumed; redemption is at-most-once
    #[error("Token already redeemed: {token_id}")]
    AlreadyRedeemed { token_id: String },

    /// Caller supplied an unusable argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Result type for redemption operations
pub type RedemptionResult<T> = Result<T, RedemptionError>;
