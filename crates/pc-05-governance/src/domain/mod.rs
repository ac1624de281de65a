//! Domain module for the Governance subsystem
//!
//! ## Core Modules
//! - resolution: quorum crossing and terminal status transitions
//! - seed: representative demo proposals

pub mod resolution;
pub mod seed;

pub use resolution::try_resolve;
pub use seed::demo_proposals;
