//! Error types for the Governance subsystem

use thiserror::Error;

/// Governance subsystem errors
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// The proposal identifier is unknown
    #[error("Proposal not found: {proposal_id}")]
    NotFound { proposal_id: String },

    /// The proposal has resolved; its status is terminal
    #[error("Proposal already resolved: {proposal_id}")]
    AlreadyResolved { proposal_id: String },

    /// Caller supplied an unusable argument
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

/// Result type for governance operations
pub type GovernanceResult<T> = Result<T, GovernanceError>;
