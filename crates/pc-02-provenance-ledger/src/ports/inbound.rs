//! Driving Ports (API - Inbound)

use crate::error::LedgerResult;
use async_trait::async_trait;
use shared_types::{BatchRecord, ContentId, LifecycleEvent, TxRef};

/// Primary Provenance Ledger API
///
/// This is the driving port for the ledger subsystem. Registration and event
/// appends are single-effect mutations; verification is a pure read with
/// request-scoped inference on misses.
#[async_trait]
pub trait ProvenanceApi: Send + Sync {
    /// Register a batch. Create-once: an existing identifier fails with
    /// `AlreadyRegistered`.
    ///
    /// # Returns
    /// * The minted transaction reference of the registration
    async fn register(
        &self,
        batch_id: &str,
        content_id: ContentId,
        expiry_date: &str,
    ) -> LedgerResult<TxRef>;

    /// Verify a batch query.
    ///
    /// An explicitly registered batch is always returned unmodified; other
    /// queries receive a synthesized record (see crate docs for the
    /// classification order).
    async fn verify(&self, query: &str) -> LedgerResult<BatchRecord>;

    /// Append a lifecycle event to an explicitly registered batch.
    ///
    /// Events are append-only; this is the only amendment path after
    /// registration.
    async fn append_event(&self, batch_id: &str, event: LifecycleEvent) -> LedgerResult<()>;

    /// Number of explicitly registered batches.
    async fn registered_count(&self) -> usize;
}
