//! Engine-level error aggregation

use pc_01_content_store::ContentStoreError;
use pc_02_provenance_ledger::LedgerError;
use pc_03_redemption::RedemptionError;
use pc_04_interaction_check::InteractionError;
use pc_05_governance::GovernanceError;
use thiserror::Error;

/// Aggregate error for the trust engine call surface
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    ContentStore(#[from] ContentStoreError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Redemption(#[from] RedemptionError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error(transparent)]
    Governance(#[from] GovernanceError),

    /// The external extraction service failed
    #[error("Extraction failed: {reason}")]
    Extraction { reason: String },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
