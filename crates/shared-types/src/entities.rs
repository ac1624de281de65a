//! # Core Domain Entities
//!
//! Defines the supply-chain trust entities used across all subsystems.
//!
//! ## Clusters
//!
//! - **Provenance**: `BatchRecord`, `LifecycleEvent`, `BatchStatus`
//! - **Content**: `ContentRecord`, `ContentLookup`, `RecordProvenance`
//! - **Redemption**: `TokenState`
//! - **Clinical**: `Severity`, `InteractionWarning`, extraction records
//! - **Governance**: `Proposal`, `ProposalStatus`, `ProposalCategory`

use serde::{Deserialize, Serialize};

/// An opaque content identifier referencing an immutable metadata blob.
///
/// Stands in for a content-addressed storage pointer; minted identifiers
/// guarantee uniqueness, not content addressing.
pub type ContentId = String;

/// A transaction reference (`0x`-prefixed hex string).
pub type TxRef = String;

// =============================================================================
// CLUSTER A: PROVENANCE
// =============================================================================

/// Authenticity status of a tracked batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// Provenance confirmed end-to-end.
    Verified,
    /// Counterfeit markers detected; must not be dispensed.
    Flagged,
    /// Past its expiry date; must not be dispensed.
    Expired,
    /// No provenance information available.
    Unknown,
}

/// Role of the actor that recorded a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorRole {
    Manufacturer,
    LogisticsProvider,
    Distributor,
    Pharmacy,
    System,
}

/// A single entry in a batch's custody history.
///
/// Append-only; insertion order is chronological order. Events are never
/// edited or removed once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    /// Unix timestamp (seconds) when the event was recorded.
    pub timestamp: u64,
    /// Who recorded the event.
    pub actor: ActorRole,
    /// Action label, e.g. `BatchRegistered`, `ShipmentReceived`.
    pub action: String,
    /// Where the event took place.
    pub location: String,
    /// Transaction reference anchoring the event.
    pub tx_ref: TxRef,
}

/// The ledger's view of one manufactured batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Caller-chosen batch identifier.
    pub batch_id: String,
    /// Current authenticity status.
    pub status: BatchStatus,
    /// Free-text origin description.
    pub origin: String,
    /// Expiry date, `YYYY-MM-DD`.
    pub expiry_date: String,
    /// Transaction reference of the registration.
    pub tx_ref: TxRef,
    /// Pointer to the batch's content metadata, if any.
    pub content_id: Option<ContentId>,
    /// Custody history, oldest first.
    pub events: Vec<LifecycleEvent>,
}

// =============================================================================
// CLUSTER B: CONTENT METADATA
// =============================================================================

/// Immutable metadata blob describing one batch's manufacturing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub product_name: String,
    pub batch_id: String,
    /// Manufacture date, `YYYY-MM-DD`.
    pub manufacture_date: String,
    pub facility_id: String,
    pub inspector_signature: String,
    /// Pointer to the certificate-of-analysis document.
    pub document_url: String,
    pub ingredients: Vec<String>,
}

/// Whether a fetched content record came from the store or was synthesized
/// on a gateway miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordProvenance {
    /// The record was found in the store.
    Stored,
    /// The record is a plausible placeholder; the store had no entry.
    Synthesized,
}

/// Result of a content fetch: the record plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLookup {
    pub record: ContentRecord,
    pub provenance: RecordProvenance,
}

impl ContentLookup {
    /// True when the record is a confirmed store hit.
    pub fn is_confirmed(&self) -> bool {
        self.provenance == RecordProvenance::Stored
    }
}

// =============================================================================
// CLUSTER C: REDEMPTION
// =============================================================================

/// State of a one-time redemption token.
///
/// The transition `Active` → `Redeemed` is one-directional; there is no way
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenState {
    Active,
    Redeemed,
}

// =============================================================================
// CLUSTER D: CLINICAL
// =============================================================================

/// Severity of a drug interaction. `High` ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// True when this severity must block a dispense action.
    pub fn is_blocking(self) -> bool {
        self == Severity::High
    }
}

/// One applicable interaction, as returned by the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionWarning {
    /// The interacting pair, e.g. `["Warfarin", "Aspirin"]`.
    pub pair: [String; 2],
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// A field read by the external extraction service, with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldReading {
    pub value: String,
    /// Extraction confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// One medication line extracted from a prescription image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMedication {
    /// The raw text as it appeared on the prescription.
    pub raw_text: String,
    /// Normalized drug name, e.g. `Amoxicillin`.
    pub normalized_name: String,
    pub strength: String,
    pub form: String,
    pub frequency: String,
    pub duration: String,
    pub ocr_confidence: f64,
    pub entity_confidence: f64,
}

/// Structured output of the external extraction service.
///
/// This engine consumes extraction results; it never performs recognition
/// itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPrescription {
    pub patient_name: FieldReading,
    pub prescriber: FieldReading,
    pub medications: Vec<ExtractedMedication>,
    /// Extraction-level warnings, e.g. low-confidence reads.
    pub warnings: Vec<String>,
}

// =============================================================================
// CLUSTER E: GOVERNANCE
// =============================================================================

/// What a proposal asks the network to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalCategory {
    ApproveManufacturer,
    VerifyBatch,
    FlagSuspiciousEntity,
    UpdateProtocol,
}

/// Lifecycle status of a proposal.
///
/// Once a proposal leaves `Active` it is terminal for this engine; there is
/// no re-opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
    Executed,
}

/// A governance proposal with its weighted vote tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Identifier, `PROP-NNN`.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ProposalCategory,
    /// Identity of the submitter.
    pub proposer: String,
    pub votes_for: u64,
    pub votes_against: u64,
    /// Unix timestamp (seconds) when voting closes.
    pub deadline: u64,
    pub status: ProposalStatus,
    /// Unix timestamp (seconds) of creation.
    pub created_at: u64,
}

impl Proposal {
    /// Total weight cast so far.
    pub fn total_votes(&self) -> u64 {
        self.votes_for.saturating_add(self.votes_against)
    }

    /// True while the proposal still accepts votes.
    pub fn is_open(&self) -> bool {
        self.status == ProposalStatus::Active
    }
}
