//! # Governance Flow
//!
//! Proposal lifecycle through the engine facade: creation, weighted vote
//! accumulation, quorum resolution, and the resolution lock.

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use pc_05_governance::{FixedPower, GovernanceApi, GovernanceConfig, ProposalLedger};

#[cfg(test)]
use pc_runtime::{EngineConfig, EngineError, TrustEngine};

#[cfg(test)]
use shared_types::{ProposalCategory, ProposalStatus};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_vote_list_through_the_facade() {
        let engine = TrustEngine::new();

        let proposal = engine
            .create_proposal(
                "Flag Batch #9928-X for Investigation",
                "Inconsistent packaging reported.",
                ProposalCategory::FlagSuspiciousEntity,
            )
            .await
            .unwrap();
        assert_eq!(proposal.status, ProposalStatus::Active);

        let after = engine.cast_vote(&proposal.id, true).await.unwrap();
        assert!(after.votes_for >= 100 && after.votes_for <= 599);
        assert_eq!(after.votes_against, 0);

        let listed = engine.list_proposals().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, proposal.id);
    }

    #[tokio::test]
    async fn unknown_proposal_fails_not_found() {
        let engine = TrustEngine::new();
        let err = engine.cast_vote("PROP-404", true).await.unwrap_err();
        assert!(matches!(err, EngineError::Governance(_)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_votes_resolve_exactly_once() {
        // Weight 599 crosses the 50 000 quorum within 84 votes; fire many
        // more concurrently and require that every vote after resolution is
        // rejected, never tallied.
        let ledger = Arc::new(ProposalLedger::with_power(
            GovernanceConfig::default(),
            Arc::new(FixedPower(599)),
        ));
        let proposal = ledger
            .create("stress", "d", ProposalCategory::UpdateProtocol)
            .await
            .unwrap();

        let mut handles = Vec::new();
        for _ in 0..200 {
            let ledger = Arc::clone(&ledger);
            let id = proposal.id.clone();
            handles.push(tokio::spawn(async move { ledger.vote(&id, true).await }));
        }

        let mut applied = 0u64;
        let mut rejected = 0u64;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => applied += 1,
                Err(err) => {
                    assert!(matches!(err, pc_05_governance::GovernanceError::AlreadyResolved { .. }));
                    rejected += 1;
                }
            }
        }
        assert_eq!(applied + rejected, 200);

        let final_state = &ledger.list().await[0];
        assert_eq!(final_state.status, ProposalStatus::Passed);
        // The tally reflects exactly the applied votes: resolution froze it.
        assert_eq!(final_state.votes_for, applied * 599);
        assert!(final_state.total_votes() >= 50_000);
    }

    #[tokio::test]
    async fn demo_seeded_engine_lists_three_shapes() {
        let engine = TrustEngine::from_config(EngineConfig {
            seed_demo_proposals: true,
            ..EngineConfig::default()
        });

        let listed = engine.list_proposals().await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].status, ProposalStatus::Active);
        assert_eq!(listed[1].status, ProposalStatus::Passed);
        assert_eq!(listed[2].status, ProposalStatus::Rejected);

        // Resolved demo proposals enforce the resolution lock too.
        let err = engine.cast_vote("PROP-002", true).await.unwrap_err();
        assert!(matches!(err, EngineError::Governance(_)));
    }
}
