//! Ports for the Governance subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::GovernanceApi;
pub use outbound::VotingPowerSource;
