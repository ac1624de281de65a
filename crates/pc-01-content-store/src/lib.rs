//! # pc-01-content-store
//!
//! Content Store mapping opaque content identifiers to immutable metadata
//! blobs (manufacturing facility, ingredients, signer, document pointer).
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Create/Read Key-Value**: `put` mints an identifier and stores a
//!   record; `get` returns it. Records are immutable once stored.
//! - **Gateway-Miss Synthesis**: a `get` for an unknown identifier returns a
//!   plausible placeholder record instead of an error, flagged as
//!   `Synthesized` so callers can tell it apart from a confirmed hit.
//!
//! ## Example
//!
//! ```rust,ignore
//! use pc_01_content_store::{ContentDraft, ContentStore};
//!
//! let store = ContentStore::new();
//! let cid = store.put(b"coa bytes", ContentDraft::default()).await?;
//! let lookup = store.get(&cid).await?;
//! assert!(lookup.is_confirmed());
//! ```

pub mod domain;
pub mod error;
pub mod service;

pub use domain::ContentDraft;
pub use error::{ContentStoreError, ContentStoreResult};
pub use service::ContentStore;
