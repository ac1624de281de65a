//! # pc-05-governance
//!
//! Proposal Ledger applying weighted votes and auto-resolving proposals
//! when a quorum threshold is crossed.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Weighted Voting**: each vote carries a pseudo-random weight drawn
//!   from an injectable `VotingPowerSource`, added to the for or against
//!   tally.
//! - **Quorum Auto-Resolution**: once the total cast weight reaches the
//!   quorum threshold the proposal resolves to `PASSED` (for > against) or
//!   `REJECTED`, and is terminal thereafter.
//! - **Resolution Lock**: votes on a resolved proposal fail with
//!   `AlreadyResolved`; resolution is one-way.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{EntropyPower, FixedPower, SeededPower};
pub use error::{GovernanceError, GovernanceResult};
pub use ports::inbound::GovernanceApi;
pub use ports::outbound::VotingPowerSource;
pub use service::{GovernanceConfig, ProposalLedger};
