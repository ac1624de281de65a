//! Ports for the engine runtime

pub mod extraction;

pub use extraction::PrescriptionExtractor;
