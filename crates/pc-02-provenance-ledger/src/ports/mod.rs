//! Ports for the Provenance Ledger subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::ProvenanceApi;
pub use outbound::FallbackSampler;
