//! Provenance Ledger service - core business logic

use crate::adapters::EntropySampler;
use crate::domain::classification::{classify_marked, is_structured_query};
use crate::domain::history::{canonical_history, registration_event};
use crate::error::{LedgerError, LedgerResult};
use crate::ports::inbound::ProvenanceApi;
use crate::ports::outbound::FallbackSampler;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{
    mint_content_id, mint_tx_ref, BatchRecord, BatchStatus, ContentId, LifecycleEvent, TxRef,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Origin recorded for explicitly registered batches.
const REGISTERED_ORIGIN: &str = "Registered via provenance dashboard";

/// Origin attached to synthesized records.
const INFERRED_ORIGIN: &str = "PharmaCorp Global Manufacturing";

/// Well-known transaction reference attached to synthesized records.
const INFERRED_TX_REF: &str = "0x71c469e192d021d5d6e7f46725420c6093469507";

/// Expiry dates attached to synthesized records.
const INFERRED_EXPIRY_OK: &str = "2026-12-31";
const INFERRED_EXPIRY_PAST: &str = "2023-01-01";

/// Ledger configuration
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Probability that an unstructured unknown query is inferred flagged.
    pub flagged_probability: f64,
    /// Probability that an unstructured unknown query is inferred expired.
    /// Expired wins when both are sampled.
    pub expired_probability: f64,
    /// Exclusive upper bound for synthesized `BATCH_<n>` numbers.
    pub synthetic_batch_ceiling: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            flagged_probability: 0.10,
            expired_probability: 0.05,
            synthetic_batch_ceiling: 100_000,
        }
    }
}

/// Provenance Ledger implementation
///
/// The ledger map holds explicitly registered batches exclusively; inferred
/// records are synthesized per request and never written back. Registration
/// is exclusive per batch identifier: the existence check and the insert
/// happen inside one write-lock section.
pub struct ProvenanceLedger {
    config: LedgerConfig,
    batches: RwLock<HashMap<String, BatchRecord>>,
    sampler: Arc<dyn FallbackSampler>,
}

impl ProvenanceLedger {
    /// Create a ledger with default config and an OS-entropy sampler.
    pub fn new() -> Self {
        Self::with_sampler(LedgerConfig::default(), Arc::new(EntropySampler::new()))
    }

    /// Create a ledger with explicit config and sampler.
    pub fn with_sampler(config: LedgerConfig, sampler: Arc<dyn FallbackSampler>) -> Self {
        Self {
            config,
            batches: RwLock::new(HashMap::new()),
            sampler,
        }
    }

    /// Classify an unregistered query and synthesize its response record.
    fn infer(&self, query: &str) -> BatchRecord {
        let structured = is_structured_query(query);
        let status = match classify_marked(query) {
            Some(marked) => marked,
            None if structured => BatchStatus::Verified,
            None => {
                let flagged = self.sampler.unit() < self.config.flagged_probability;
                let expired = self.sampler.unit() < self.config.expired_probability;
                if expired {
                    BatchStatus::Expired
                } else if flagged {
                    BatchStatus::Flagged
                } else {
                    BatchStatus::Verified
                }
            }
        };

        let batch_id = if structured {
            query.to_string()
        } else {
            let n = (self.sampler.unit() * f64::from(self.config.synthetic_batch_ceiling)) as u32;
            format!("BATCH_{n}")
        };

        let expiry_date = if status == BatchStatus::Expired {
            INFERRED_EXPIRY_PAST
        } else {
            INFERRED_EXPIRY_OK
        };

        tracing::debug!(%query, ?status, "verification miss, record inferred");

        BatchRecord {
            batch_id,
            status,
            origin: INFERRED_ORIGIN.into(),
            expiry_date: expiry_date.into(),
            tx_ref: INFERRED_TX_REF.into(),
            content_id: Some(mint_content_id(query.as_bytes())),
            events: canonical_history(),
        }
    }
}

impl Default for ProvenanceLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProvenanceApi for ProvenanceLedger {
    async fn register(
        &self,
        batch_id: &str,
        content_id: ContentId,
        expiry_date: &str,
    ) -> LedgerResult<TxRef> {
        if batch_id.trim().is_empty() {
            return Err(LedgerError::InvalidInput {
                reason: "empty batch identifier".into(),
            });
        }
        if expiry_date.trim().is_empty() {
            return Err(LedgerError::InvalidInput {
                reason: "empty expiry date".into(),
            });
        }

        let mut batches = self.batches.write();
        match batches.entry(batch_id.to_string()) {
            Entry::Occupied(_) => Err(LedgerError::AlreadyRegistered {
                batch_id: batch_id.to_string(),
            }),
            Entry::Vacant(slot) => {
                let tx_ref = mint_tx_ref();
                slot.insert(BatchRecord {
                    batch_id: batch_id.to_string(),
                    status: BatchStatus::Verified,
                    origin: REGISTERED_ORIGIN.into(),
                    expiry_date: expiry_date.to_string(),
                    tx_ref: tx_ref.clone(),
                    content_id: Some(content_id),
                    events: vec![registration_event(&tx_ref)],
                });
                tracing::info!(%batch_id, %tx_ref, "batch registered");
                Ok(tx_ref)
            }
        }
    }

    async fn verify(&self, query: &str) -> LedgerResult<BatchRecord> {
        if query.trim().is_empty() {
            return Err(LedgerError::InvalidInput {
                reason: "empty verification query".into(),
            });
        }

        // Explicit beats inferred, always.
        if let Some(record) = self.batches.read().get(query) {
            return Ok(record.clone());
        }

        Ok(self.infer(query))
    }

    async fn append_event(&self, batch_id: &str, event: LifecycleEvent) -> LedgerResult<()> {
        let mut batches = self.batches.write();
        let record = batches
            .get_mut(batch_id)
            .ok_or_else(|| LedgerError::NotFound {
                batch_id: batch_id.to_string(),
            })?;
        tracing::info!(%batch_id, action = %event.action, "lifecycle event appended");
        record.events.push(event);
        Ok(())
    }

    async fn registered_count(&self) -> usize {
        self.batches.read().len()
    }
}
