//! # pc-03-redemption
//!
//! Redemption Registry mapping token identifiers to a one-way state
//! transition `ACTIVE` → `REDEEMED`.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Verify-Then-Consume**: `status` is a pure read; only `redeem`
//!   mutates, and a second redeem of the same token is rejected, never
//!   silently accepted.
//! - **Atomic Consumption**: the state check and the state set happen inside
//!   one write-lock section, so two concurrent redeems of the same token can
//!   never both succeed.
//! - **Reserved Suffix**: tokens ending in a reserved numeric suffix are
//!   pre-redeemed for demonstration continuity.

pub mod error;
pub mod service;

pub use error::{RedemptionError, RedemptionResult};
pub use service::{RedemptionConfig, RedemptionRegistry};
