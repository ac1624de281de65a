//! Quorum resolution
//!
//! A proposal resolves the moment its total cast weight reaches the quorum
//! threshold: `PASSED` when the for-tally strictly exceeds the against-tally
//! at resolution time, `REJECTED` otherwise. Resolution is one-way.

use shared_types::{Proposal, ProposalStatus};

/// Resolve the proposal if quorum is reached. Returns true when the status
/// changed.
pub fn try_resolve(proposal: &mut Proposal, quorum_threshold: u64) -> bool {
    if proposal.status != ProposalStatus::Active {
        return false;
    }
    if proposal.total_votes() < quorum_threshold {
        return false;
    }
    proposal.status = if proposal.votes_for > proposal.votes_against {
        ProposalStatus::Passed
    } else {
        ProposalStatus::Rejected
    };
    true
}
