//! Driving Ports (API - Inbound)

use crate::error::GovernanceResult;
use async_trait::async_trait;
use shared_types::{Proposal, ProposalCategory};

/// Primary Governance API
///
/// Proposal creation and vote casting are single-effect mutations; listing
/// is a pure read.
#[async_trait]
pub trait GovernanceApi: Send + Sync {
    /// Create a proposal: status `ACTIVE`, zero votes, deadline one voting
    /// window from now, proposer fixed to the submitting-regulator identity.
    async fn create(
        &self,
        title: &str,
        description: &str,
        category: ProposalCategory,
    ) -> GovernanceResult<Proposal>;

    /// Cast a weighted vote for (`support = true`) or against a proposal.
    ///
    /// Crossing the quorum threshold resolves the proposal; votes on a
    /// resolved proposal fail with `AlreadyResolved`.
    ///
    /// # Returns
    /// * The proposal after the vote (and any resolution) applied
    async fn vote(&self, proposal_id: &str, support: bool) -> GovernanceResult<Proposal>;

    /// All proposals, newest-created first.
    async fn list(&self) -> Vec<Proposal>;
}
