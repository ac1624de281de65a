//! Content Store service - locked key-value state

use crate::domain::{synthesize_placeholder, ContentDraft};
use crate::error::{ContentStoreError, ContentStoreResult};
use parking_lot::RwLock;
use shared_types::{
    mint_content_id, ContentId, ContentLookup, ContentRecord, RecordProvenance,
};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// In-memory content store.
///
/// Records are immutable once stored; the store exclusively owns them and
/// hands out clones, never references into its map.
pub struct ContentStore {
    records: RwLock<HashMap<ContentId, ContentRecord>>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Store a record for the given document, filling unset draft fields
    /// with caller-agnostic defaults. Returns the minted identifier.
    ///
    /// Identifier collisions retry generation; with 176 bits of digest over
    /// fresh entropy this loop settles on the first pass in practice.
    pub async fn put(
        &self,
        document: &[u8],
        draft: ContentDraft,
    ) -> ContentStoreResult<ContentId> {
        let draft_bytes = serde_json::to_vec(&draft).map_err(|e| {
            ContentStoreError::InvalidInput {
                reason: format!("unserializable draft: {e}"),
            }
        })?;

        let mut records = self.records.write();
        loop {
            let mut payload = Vec::with_capacity(document.len() + draft_bytes.len());
            payload.extend_from_slice(document);
            payload.extend_from_slice(&draft_bytes);
            let content_id = mint_content_id(&payload);

            match records.entry(content_id.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    slot.insert(draft.clone().resolve(&content_id));
                    tracing::debug!(%content_id, "content record stored");
                    return Ok(content_id);
                }
            }
        }
    }

    /// Fetch a record by identifier.
    ///
    /// A store hit returns the record with provenance `Stored`. A miss
    /// degrades to a synthesized placeholder flagged `Synthesized` rather
    /// than failing; the record may still exist outside this cache.
    pub async fn get(&self, content_id: &str) -> ContentStoreResult<ContentLookup> {
        if content_id.trim().is_empty() {
            return Err(ContentStoreError::InvalidInput {
                reason: "empty content identifier".into(),
            });
        }

        if let Some(record) = self.records.read().get(content_id) {
            return Ok(ContentLookup {
                record: record.clone(),
                provenance: RecordProvenance::Stored,
            });
        }

        tracing::debug!(%content_id, "content miss, synthesizing placeholder");
        Ok(ContentLookup {
            record: synthesize_placeholder(content_id),
            provenance: RecordProvenance::Synthesized,
        })
    }

    /// Number of confirmed records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when no records have been stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
