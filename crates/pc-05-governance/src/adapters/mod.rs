//! Adapters implementing the governance outbound ports

pub mod power;

pub use power::{EntropyPower, FixedPower, SeededPower};
