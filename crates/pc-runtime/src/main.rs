//! Demo entry point: wires a default engine and walks one end-to-end
//! register → verify → check → redeem pass.

use anyhow::Result;
use pc_01_content_store::ContentDraft;
use pc_runtime::{EngineConfig, TrustEngine};
use shared_types::ProposalCategory;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let engine = TrustEngine::from_config(EngineConfig {
        seed_demo_proposals: true,
        ..EngineConfig::default()
    });

    // Register a batch with its certificate of analysis.
    let registration = engine
        .register_batch_with_document(
            "BATCH_2024_0042",
            b"%PDF-1.4 certificate of analysis",
            ContentDraft {
                product_name: Some("Amoxicillin 500mg Capsules".into()),
                batch_id: Some("BATCH_2024_0042".into()),
                facility_id: Some("FAC-BERN-04".into()),
                document_name: Some("coa.pdf".into()),
                ingredients: Some(vec![
                    "Amoxicillin Trihydrate".into(),
                    "Magnesium Stearate".into(),
                ]),
                ..ContentDraft::default()
            },
            "2027-06-30",
        )
        .await?;
    tracing::info!(tx_ref = %registration.tx_ref, "batch registered");

    // Authoritative lookup vs. heuristic inference.
    let registered = engine.verify_batch("BATCH_2024_0042").await?;
    tracing::info!(status = ?registered.status, events = registered.events.len(), "registered batch verified");
    let counterfeit = engine.verify_batch("FAKE123").await?;
    tracing::info!(status = ?counterfeit.status, "counterfeit marker classified");

    // Interaction gate ahead of dispense.
    let review = engine.review_prescription(b"prescription image bytes").await?;
    tracing::info!(
        medications = review.prescription.medications.len(),
        warnings = review.warnings.len(),
        blocked = review.dispense_blocked,
        "prescription reviewed"
    );

    // One-time redemption: the second attempt must fail.
    let token_id = "NFT-882910";
    let burn_tx = engine.redeem_token(token_id).await?;
    tracing::info!(%token_id, %burn_tx, "token redeemed");
    if let Err(err) = engine.redeem_token(token_id).await {
        tracing::info!(%err, "second redemption rejected");
    }

    // Governance round.
    let proposal = engine
        .create_proposal(
            "Approve BioGen Labs as Certified Manufacturer",
            "Compliance documents FDA-2024-882 submitted for review.",
            ProposalCategory::ApproveManufacturer,
        )
        .await?;
    let after_vote = engine.cast_vote(&proposal.id, true).await?;
    tracing::info!(
        proposal_id = %after_vote.id,
        votes_for = after_vote.votes_for,
        "vote applied"
    );
    tracing::info!(proposals = engine.list_proposals().await.len(), "governance ledger listed");

    Ok(())
}
