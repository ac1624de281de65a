//! # pc-02-provenance-ledger
//!
//! Provenance Ledger mapping batch identifiers to authenticity records with
//! an ordered custody history.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Create-Once Registration**: a batch identifier is registered exactly
//!   once; re-registration fails and amendments go through explicit new
//!   lifecycle events.
//! - **Dual-Path Verification**: an explicitly registered batch is returned
//!   unmodified; anything else gets a deterministic-then-stochastic
//!   classification and a structurally complete synthesized record, so every
//!   query yields an explorable response.
//! - **Injectable Inference**: the stochastic arm of classification draws
//!   from a `FallbackSampler` port so tests can pin outcomes.
//!
//! ## Verification Algorithm
//!
//! ```text
//! verify(query)
//!   ├── ledger hit ────────────────→ the registered record, always
//!   └── miss
//!         ├── counterfeit marker ──→ FLAGGED
//!         ├── expiry marker ───────→ EXPIRED
//!         ├── unstructured query ──→ sampled (request-scoped inference)
//!         └── structured query ────→ VERIFIED
//! ```
//!
//! Inferred records are never written back; the ledger map holds explicitly
//! registered batches exclusively.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{EntropySampler, FixedSampler, SeededSampler};
pub use domain::classification::{is_structured_query, classify_marked};
pub use domain::history::canonical_history;
pub use error::{LedgerError, LedgerResult};
pub use ports::inbound::ProvenanceApi;
pub use ports::outbound::FallbackSampler;
pub use service::{LedgerConfig, ProvenanceLedger};
