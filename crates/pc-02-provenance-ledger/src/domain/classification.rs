//! Query classification for unregistered batch identifiers
//!
//! The deterministic arm of fallback inference: marker substrings force a
//! status, and the query's shape decides whether the stochastic arm applies
//! at all. Matching is case-insensitive over the uppercased query.

use shared_types::BatchStatus;

/// Substrings that mark a query as counterfeit.
const COUNTERFEIT_MARKERS: [&str; 2] = ["FAKE", "BAD"];

/// Substring that marks a query as past expiry.
const EXPIRY_MARKER: &str = "EXP";

/// Prefixes of structured batch/transaction identifiers.
const STRUCTURED_PREFIXES: [&str; 2] = ["BATCH", "0X"];

/// Classify a query by its marker substrings alone.
///
/// Counterfeit markers win over the expiry marker when both appear.
/// Returns `None` when no marker is present.
pub fn classify_marked(query: &str) -> Option<BatchStatus> {
    let upper = query.to_uppercase();
    if COUNTERFEIT_MARKERS.iter().any(|m| upper.contains(m)) {
        return Some(BatchStatus::Flagged);
    }
    if upper.contains(EXPIRY_MARKER) {
        return Some(BatchStatus::Expired);
    }
    None
}

/// True when the query looks like a structured batch or transaction
/// identifier rather than free text.
pub fn is_structured_query(query: &str) -> bool {
    let upper = query.to_uppercase();
    STRUCTURED_PREFIXES.iter().any(|p| upper.starts_with(p))
}
