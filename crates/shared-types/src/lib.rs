//! # Shared Types Crate
//!
//! This crate contains all domain entities shared across the Pharma-Chain
//! subsystems, plus the identifier minting helpers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Value Cross-References**: Records reference each other by string keys
//!   (`ContentId`, `TxRef`), never by live pointers, so stores evolve
//!   independently.
//! - **Exclusive Ownership**: Each store owns its records; nothing here is
//!   shared mutable state.

pub mod entities;
pub mod ids;
pub mod time;

pub use entities::*;
pub use ids::{mint_content_id, mint_tx_ref};
pub use time::{today_ymd, unix_now};
