//! Governance service - proposal state and vote application

use crate::adapters::EntropyPower;
use crate::domain::resolution::try_resolve;
use crate::domain::seed::demo_proposals;
use crate::error::{GovernanceError, GovernanceResult};
use crate::ports::inbound::GovernanceApi;
use crate::ports::outbound::VotingPowerSource;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{unix_now, Proposal, ProposalCategory, ProposalStatus};
use std::sync::Arc;

/// Identity recorded as proposer for locally created proposals.
const PROPOSER_IDENTITY: &str = "0xYou (Regulator)";

/// Governance configuration
#[derive(Clone, Debug)]
pub struct GovernanceConfig {
    /// Total cast weight at which a proposal auto-resolves.
    pub quorum_threshold: u64,
    /// Inclusive bounds for per-vote weight draws.
    pub min_vote_weight: u64,
    pub max_vote_weight: u64,
    /// Voting window added to the creation time as deadline.
    pub voting_window_secs: u64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            quorum_threshold: 50_000,
            min_vote_weight: 100,
            max_vote_weight: 599,
            voting_window_secs: 3 * 86_400,
        }
    }
}

/// Internal governance state
struct GovernanceState {
    /// Proposals, newest-created first.
    proposals: Vec<Proposal>,
    /// Next numeric suffix for minted `PROP-NNN` identifiers.
    next_id: u64,
}

/// Proposal Ledger implementation
///
/// Vote application is check-weigh-resolve inside one write-lock section:
/// the resolution check, the tally update, and any quorum resolution are
/// atomic from the caller's perspective.
pub struct ProposalLedger {
    config: GovernanceConfig,
    state: RwLock<GovernanceState>,
    power: Arc<dyn VotingPowerSource>,
}

impl ProposalLedger {
    /// Create an empty ledger with default config and an OS-entropy power
    /// source.
    pub fn new() -> Self {
        Self::with_power(GovernanceConfig::default(), Arc::new(EntropyPower::new()))
    }

    /// Create an empty ledger with explicit config and power source.
    pub fn with_power(config: GovernanceConfig, power: Arc<dyn VotingPowerSource>) -> Self {
        Self {
            config,
            state: RwLock::new(GovernanceState {
                proposals: Vec::new(),
                next_id: 1,
            }),
            power,
        }
    }

    /// Create a ledger pre-seeded with the three representative demo
    /// proposals.
    pub fn with_demo_proposals() -> Self {
        let ledger = Self::new();
        ledger.seed_demo_proposals();
        ledger
    }

    /// Fill an empty ledger with the representative demo proposals.
    /// A ledger that already holds proposals is left untouched.
    pub fn seed_demo_proposals(&self) {
        let mut state = self.state.write();
        if state.proposals.is_empty() {
            state.proposals = demo_proposals(unix_now());
            state.next_id = 4;
        }
    }
}

impl Default for ProposalLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GovernanceApi for ProposalLedger {
    async fn create(
        &self,
        title: &str,
        description: &str,
        category: ProposalCategory,
    ) -> GovernanceResult<Proposal> {
        if title.trim().is_empty() {
            return Err(GovernanceError::InvalidInput {
                reason: "empty proposal title".into(),
            });
        }

        let now = unix_now();
        let mut state = self.state.write();
        let proposal = Proposal {
            id: format!("PROP-{:03}", state.next_id),
            title: title.to_string(),
            description: description.to_string(),
            category,
            proposer: PROPOSER_IDENTITY.into(),
            votes_for: 0,
            votes_against: 0,
            deadline: now + self.config.voting_window_secs,
            status: ProposalStatus::Active,
            created_at: now,
        };
        state.next_id += 1;
        state.proposals.insert(0, proposal.clone());
        tracing::info!(proposal_id = %proposal.id, "proposal created");
        Ok(proposal)
    }

    async fn vote(&self, proposal_id: &str, support: bool) -> GovernanceResult<Proposal> {
        let mut state = self.state.write();
        let proposal = state
            .proposals
            .iter_mut()
            .find(|p| p.id == proposal_id)
            .ok_or_else(|| GovernanceError::NotFound {
                proposal_id: proposal_id.to_string(),
            })?;

        if !proposal.is_open() {
            return Err(GovernanceError::AlreadyResolved {
                proposal_id: proposal_id.to_string(),
            });
        }

        let weight = self
            .power
            .draw_weight(self.config.min_vote_weight, self.config.max_vote_weight);
        if support {
            proposal.votes_for = proposal.votes_for.saturating_add(weight);
        } else {
            proposal.votes_against = proposal.votes_against.saturating_add(weight);
        }

        if try_resolve(proposal, self.config.quorum_threshold) {
            tracing::info!(
                proposal_id = %proposal.id,
                status = ?proposal.status,
                "proposal resolved at quorum"
            );
        }
        Ok(proposal.clone())
    }

    async fn list(&self) -> Vec<Proposal> {
        self.state.read().proposals.clone()
    }
}
