//! # End-to-End Dispense Flow
//!
//! The verify-then-consume choreography through the engine facade:
//!
//! ```text
//! upload content ──→ register batch ──→ verify batch
//!                                            │
//!                   review prescription ─────┤ (interaction gate)
//!                                            ↓
//!                                      redeem token (exactly once)
//! ```

#[cfg(test)]
use pc_01_content_store::ContentDraft;

#[cfg(test)]
use pc_04_interaction_check::matcher;

#[cfg(test)]
use pc_runtime::{EngineConfig, EngineError, TrustEngine};

#[cfg(test)]
use shared_types::{BatchStatus, RecordProvenance, TokenState};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn full_dispense_pass() {
        let engine = TrustEngine::new();

        // 1. Register the batch with its certificate of analysis.
        let registration = engine
            .register_batch_with_document(
                "BATCH_E2E_01",
                b"%PDF-1.4 coa",
                ContentDraft {
                    product_name: Some("Amoxicillin 500mg Capsules".into()),
                    batch_id: Some("BATCH_E2E_01".into()),
                    ..ContentDraft::default()
                },
                "2027-06-30",
            )
            .await
            .unwrap();

        // 2. The pharmacy verifies the batch before dispensing.
        let record = engine.verify_batch("BATCH_E2E_01").await.unwrap();
        assert_eq!(record.status, BatchStatus::Verified);
        assert_eq!(record.events.len(), 1);

        // 3. Content metadata resolves to the confirmed record.
        let lookup = engine
            .get_content_metadata(&registration.content_id)
            .await
            .unwrap();
        assert_eq!(lookup.provenance, RecordProvenance::Stored);
        assert_eq!(lookup.record.product_name, "Amoxicillin 500mg Capsules");

        // 4. The prescription passes the interaction gate.
        let review = engine.review_prescription(b"image").await.unwrap();
        assert!(!review.dispense_blocked);

        // 5. The dispense consumes the token exactly once.
        let token_id = "NFT-E2E-1024";
        assert_eq!(
            engine.token_status(token_id).await.unwrap(),
            TokenState::Active
        );
        engine.redeem_token(token_id).await.unwrap();
        let err = engine.redeem_token(token_id).await.unwrap_err();
        assert!(matches!(err, EngineError::Redemption(_)));
    }

    #[tokio::test]
    async fn counterfeit_and_expiry_markers_block_the_flow() {
        let engine = TrustEngine::new();

        let counterfeit = engine.verify_batch("FAKE123").await.unwrap();
        assert_eq!(counterfeit.status, BatchStatus::Flagged);

        let expired = engine.verify_batch("EXP456").await.unwrap();
        assert_eq!(expired.status, BatchStatus::Expired);

        // Structured but unregistered identifiers still yield an explorable
        // record with the canonical history.
        let unknown = engine.verify_batch("BATCH_001").await.unwrap();
        assert_eq!(unknown.status, BatchStatus::Verified);
        assert_eq!(unknown.events.len(), 4);
        assert!(unknown
            .events
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[tokio::test]
    async fn interaction_gate_blocks_high_severity_combinations() {
        let engine = TrustEngine::new();

        let warnings = engine
            .check_interactions(&["Warfarin 5mg".into(), "Ibuprofen 200mg".into()])
            .await
            .unwrap();
        assert!(warnings
            .iter()
            .any(|w| w.pair == ["Warfarin".to_string(), "NSAIDs".to_string()]
                && w.severity.is_blocking()));

        let warnings = engine
            .check_interactions(&["Amoxicillin 500mg".into(), "Methotrexate 2.5mg".into()])
            .await
            .unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].severity.is_blocking());
    }

    #[tokio::test]
    async fn facade_delegates_interaction_checks_faithfully() {
        let engine = TrustEngine::new();
        let medications: Vec<String> = [
            "Warfarin 5mg",
            "Aspirin 81mg",
            "Naproxen 250mg",
            "Simvastatin 40mg",
            "Amlodipine 5mg",
        ]
        .iter()
        .map(|m| m.to_string())
        .collect();

        let via_engine = engine.check_interactions(&medications).await.unwrap();
        let direct = matcher::check(&medications).unwrap();
        assert_eq!(via_engine, direct);
        assert!(matcher::has_blocking(&via_engine));
    }

    #[tokio::test]
    async fn engines_are_isolated_stores() {
        // Fresh engine instances share nothing; a registration in one is
        // invisible to the other.
        let a = TrustEngine::new();
        let b = TrustEngine::new();

        a.register_batch("BATCH_ISO", "QmContent".into(), "2027-01-01")
            .await
            .unwrap();
        b.register_batch("BATCH_ISO", "QmContent".into(), "2027-01-01")
            .await
            .unwrap();

        a.redeem_token("NFT-ISO").await.unwrap();
        assert_eq!(b.token_status("NFT-ISO").await.unwrap(), TokenState::Active);
    }

    #[tokio::test]
    async fn pinned_inference_classifies_unstructured_queries() {
        // Seeded engines replay the same inference for the same query order.
        let config = EngineConfig {
            rng_seed: Some(77),
            ..EngineConfig::default()
        };
        let a = TrustEngine::from_config(config.clone());
        let b = TrustEngine::from_config(config);

        for query in ["loose tablet scan", "another free text", "blue pill"] {
            let ra = a.verify_batch(query).await.unwrap();
            let rb = b.verify_batch(query).await.unwrap();
            assert_eq!(ra.status, rb.status);
            assert_eq!(ra.batch_id, rb.batch_id);
        }
    }
}
