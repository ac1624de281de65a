//! The trust engine facade
//!
//! Owns one instance of each store and exposes the whole call surface as
//! thin delegating methods. Stores are constructed exactly once, here, and
//! shared by `Arc`; nothing in the engine keeps ambient global state.

use crate::adapters::FixtureExtractor;
use crate::alternatives::{alternatives_for, AlternativeMedicine};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::ports::PrescriptionExtractor;
use pc_01_content_store::{ContentDraft, ContentStore};
use pc_02_provenance_ledger::{
    EntropySampler, FallbackSampler, ProvenanceApi, ProvenanceLedger, SeededSampler,
};
use pc_03_redemption::RedemptionRegistry;
use pc_04_interaction_check::matcher;
use pc_05_governance::{
    EntropyPower, GovernanceApi, ProposalLedger, SeededPower, VotingPowerSource,
};
use serde::{Deserialize, Serialize};
use shared_types::{
    BatchRecord, ContentId, ContentLookup, ExtractedPrescription, InteractionWarning,
    LifecycleEvent, Proposal, ProposalCategory, TokenState, TxRef,
};
use std::sync::Arc;

/// Result of the composed upload-then-register flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRegistration {
    pub batch_id: String,
    pub content_id: ContentId,
    pub tx_ref: TxRef,
}

/// Result of a prescription review: the extracted record plus the
/// interaction gate's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionReview {
    pub prescription: ExtractedPrescription,
    pub warnings: Vec<InteractionWarning>,
    /// True when a HIGH-severity interaction forbids dispensing.
    pub dispense_blocked: bool,
}

/// The Provenance & Trust Engine.
///
/// One instance per process; cheap to clone handles out of via the
/// accessor methods if a caller needs a single subsystem.
pub struct TrustEngine {
    content_store: Arc<ContentStore>,
    ledger: Arc<ProvenanceLedger>,
    redemption: Arc<RedemptionRegistry>,
    governance: Arc<ProposalLedger>,
    extractor: Arc<dyn PrescriptionExtractor>,
}

impl TrustEngine {
    /// Engine with default configuration and the fixture extractor.
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    /// Engine from explicit configuration, with the fixture extractor.
    pub fn from_config(config: EngineConfig) -> Self {
        Self::with_extractor(config, Arc::new(FixtureExtractor))
    }

    /// Engine from explicit configuration and extraction adapter.
    pub fn with_extractor(config: EngineConfig, extractor: Arc<dyn PrescriptionExtractor>) -> Self {
        let (sampler, power): (Arc<dyn FallbackSampler>, Arc<dyn VotingPowerSource>) =
            match config.rng_seed {
                Some(seed) => (
                    Arc::new(SeededSampler::from_seed(seed)),
                    Arc::new(SeededPower::from_seed(seed.wrapping_add(1))),
                ),
                None => (
                    Arc::new(EntropySampler::new()),
                    Arc::new(EntropyPower::new()),
                ),
            };

        let governance = ProposalLedger::with_power(config.governance, power);
        if config.seed_demo_proposals {
            governance.seed_demo_proposals();
        }

        Self {
            content_store: Arc::new(ContentStore::new()),
            ledger: Arc::new(ProvenanceLedger::with_sampler(config.ledger, sampler)),
            redemption: Arc::new(RedemptionRegistry::with_config(config.redemption)),
            governance: Arc::new(governance),
            extractor,
        }
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Store a content document, returning the minted identifier.
    pub async fn upload_content(
        &self,
        document: &[u8],
        draft: ContentDraft,
    ) -> EngineResult<ContentId> {
        Ok(self.content_store.put(document, draft).await?)
    }

    /// Fetch content metadata; misses degrade to a flagged placeholder.
    pub async fn get_content_metadata(&self, content_id: &str) -> EngineResult<ContentLookup> {
        Ok(self.content_store.get(content_id).await?)
    }

    // ------------------------------------------------------------------
    // Provenance
    // ------------------------------------------------------------------

    /// Register a batch against an already-stored content identifier.
    pub async fn register_batch(
        &self,
        batch_id: &str,
        content_id: ContentId,
        expiry_date: &str,
    ) -> EngineResult<TxRef> {
        Ok(self.ledger.register(batch_id, content_id, expiry_date).await?)
    }

    /// Composed flow: store the document, then register the batch against
    /// the minted content identifier.
    pub async fn register_batch_with_document(
        &self,
        batch_id: &str,
        document: &[u8],
        draft: ContentDraft,
        expiry_date: &str,
    ) -> EngineResult<BatchRegistration> {
        let content_id = self.content_store.put(document, draft).await?;
        let tx_ref = self
            .ledger
            .register(batch_id, content_id.clone(), expiry_date)
            .await?;
        Ok(BatchRegistration {
            batch_id: batch_id.to_string(),
            content_id,
            tx_ref,
        })
    }

    /// Verify a batch query (authoritative lookup, inference fallback).
    pub async fn verify_batch(&self, query: &str) -> EngineResult<BatchRecord> {
        Ok(self.ledger.verify(query).await?)
    }

    /// Append a lifecycle event to a registered batch.
    pub async fn append_lifecycle_event(
        &self,
        batch_id: &str,
        event: LifecycleEvent,
    ) -> EngineResult<()> {
        Ok(self.ledger.append_event(batch_id, event).await?)
    }

    // ------------------------------------------------------------------
    // Redemption
    // ------------------------------------------------------------------

    /// Current token state. Pure read.
    pub async fn token_status(&self, token_id: &str) -> EngineResult<TokenState> {
        Ok(self.redemption.status(token_id).await?)
    }

    /// Consume a token; at most one caller ever succeeds per token.
    pub async fn redeem_token(&self, token_id: &str) -> EngineResult<TxRef> {
        Ok(self.redemption.redeem(token_id).await?)
    }

    // ------------------------------------------------------------------
    // Clinical
    // ------------------------------------------------------------------

    /// Evaluate the interaction rule table against medication names.
    pub async fn check_interactions(
        &self,
        medications: &[String],
    ) -> EngineResult<Vec<InteractionWarning>> {
        Ok(matcher::check(medications)?)
    }

    /// Extract a prescription and gate it on the interaction table.
    pub async fn review_prescription(&self, image: &[u8]) -> EngineResult<PrescriptionReview> {
        let prescription = self.extractor.extract(image).await?;
        let names: Vec<String> = prescription
            .medications
            .iter()
            .map(|m| m.normalized_name.clone())
            .collect();
        let warnings = matcher::check(&names)?;
        let dispense_blocked = matcher::has_blocking(&warnings);
        if dispense_blocked {
            tracing::warn!(
                patient = %prescription.patient_name.value,
                warnings = warnings.len(),
                "dispense blocked by interaction gate"
            );
        }
        Ok(PrescriptionReview {
            prescription,
            warnings,
            dispense_blocked,
        })
    }

    /// Substitution candidates for a medicine, best first.
    pub fn alternatives(&self, medicine_name: &str) -> Vec<AlternativeMedicine> {
        alternatives_for(medicine_name)
    }

    // ------------------------------------------------------------------
    // Governance
    // ------------------------------------------------------------------

    /// Create a proposal.
    pub async fn create_proposal(
        &self,
        title: &str,
        description: &str,
        category: ProposalCategory,
    ) -> EngineResult<Proposal> {
        Ok(self.governance.create(title, description, category).await?)
    }

    /// Cast a weighted vote.
    pub async fn cast_vote(&self, proposal_id: &str, support: bool) -> EngineResult<Proposal> {
        Ok(self.governance.vote(proposal_id, support).await?)
    }

    /// All proposals, newest first.
    pub async fn list_proposals(&self) -> Vec<Proposal> {
        self.governance.list().await
    }

    // ------------------------------------------------------------------
    // Subsystem handles
    // ------------------------------------------------------------------

    pub fn content_store(&self) -> Arc<ContentStore> {
        Arc::clone(&self.content_store)
    }

    pub fn ledger(&self) -> Arc<ProvenanceLedger> {
        Arc::clone(&self.ledger)
    }

    pub fn redemption(&self) -> Arc<RedemptionRegistry> {
        Arc::clone(&self.redemption)
    }

    pub fn governance(&self) -> Arc<ProposalLedger> {
        Arc::clone(&self.governance)
    }
}

impl Default for TrustEngine {
    fn default() -> Self {
        Self::new()
    }
}
