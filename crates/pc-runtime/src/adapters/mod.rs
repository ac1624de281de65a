//! Adapters implementing the runtime's outbound ports

pub mod fixture_extractor;

pub use fixture_extractor::FixtureExtractor;
