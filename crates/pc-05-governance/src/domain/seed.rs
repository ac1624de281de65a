//! Representative demo proposals
//!
//! Pre-seeded ledger content for demonstration continuity: one proposal per
//! terminal-path shape (still active, passed, rejected). Timestamps are
//! relative to the supplied `now`.

use shared_types::{Proposal, ProposalCategory, ProposalStatus};

const DAY_SECS: u64 = 86_400;

/// Build the three demo proposals, newest first.
pub fn demo_proposals(now: u64) -> Vec<Proposal> {
    vec![
        Proposal {
            id: "PROP-001".into(),
            title: "Approve BioGen Labs as Certified Manufacturer".into(),
            description: "BioGen Labs has submitted all required compliance documents \
                          (FDA-2024-882). Vote to whitelist their address on the supply \
                          chain contract."
                .into(),
            category: ProposalCategory::ApproveManufacturer,
            proposer: "0xRegulator...A12".into(),
            votes_for: 12_500,
            votes_against: 450,
            deadline: now + 2 * DAY_SECS,
            status: ProposalStatus::Active,
            created_at: now.saturating_sub(DAY_SECS),
        },
        Proposal {
            id: "PROP-002".into(),
            title: "Flag Batch #9928-X for Investigation".into(),
            description: "Multiple reports of inconsistent packaging from Distributor \
                          node 0x77...22. Suspending batch verification until inspected."
                .into(),
            category: ProposalCategory::FlagSuspiciousEntity,
            proposer: "0xPharmacyGuild...B99".into(),
            votes_for: 32_000,
            votes_against: 120,
            deadline: now.saturating_sub(3_600),
            status: ProposalStatus::Passed,
            created_at: now.saturating_sub(3 * DAY_SECS),
        },
        Proposal {
            id: "PROP-003".into(),
            title: "Update API Rate Limits for Public Verifier".into(),
            description: "Increase public node rate limits to 1000 req/min to support \
                          holiday traffic."
                .into(),
            category: ProposalCategory::UpdateProtocol,
            proposer: "0xDevTeam...C44".into(),
            votes_for: 5_000,
            votes_against: 8_200,
            deadline: now.saturating_sub(5 * DAY_SECS),
            status: ProposalStatus::Rejected,
            created_at: now.saturating_sub(7 * DAY_SECS),
        },
    ]
}
