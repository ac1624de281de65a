//! # pc-runtime
//!
//! Engine runtime: constructs each store once at startup and exposes the
//! full trust call surface through the [`TrustEngine`] facade.
//!
//! ## Architectural Patterns
//!
//! - **Explicit Wiring**: stores are constructed here and passed by
//!   reference to whoever needs them; there is no ambient global state, so
//!   tests get isolation from fresh engine instances.
//! - **Hexagonal Architecture**: the consumed extraction capability is a
//!   port; the runtime ships a deterministic fixture adapter.
//!
//! ## Call Surface
//!
//! `register_batch`, `verify_batch`, `upload_content`,
//! `get_content_metadata`, `redeem_token`, `token_status`,
//! `check_interactions`, `create_proposal`, `cast_vote`, `list_proposals`,
//! `review_prescription`, `alternatives`.

pub mod adapters;
pub mod alternatives;
pub mod config;
pub mod engine;
pub mod error;
pub mod ports;

pub use adapters::FixtureExtractor;
pub use alternatives::{alternatives_for, AlternativeMedicine};
pub use config::EngineConfig;
pub use engine::{BatchRegistration, PrescriptionReview, TrustEngine};
pub use error::{EngineError, EngineResult};
pub use ports::PrescriptionExtractor;
