//! Adapters implementing the ledger's outbound ports

pub mod sampler;

pub use sampler::{EntropySampler, FixedSampler, SeededSampler};
