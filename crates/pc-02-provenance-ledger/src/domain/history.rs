//! Canonical custody histories
//!
//! Builders for the lifecycle events attached to ledger records: the single
//! registration event for explicit registrations, and the four-event
//! canonical history synthesized for inferred records.

use shared_types::{unix_now, ActorRole, LifecycleEvent, TxRef};

/// Build the registration event for a freshly registered batch.
pub fn registration_event(tx_ref: &TxRef) -> LifecycleEvent {
    LifecycleEvent {
        timestamp: unix_now(),
        actor: ActorRole::Manufacturer,
        action: "BatchRegistered".into(),
        location: "Online Dashboard".into(),
        tx_ref: tx_ref.clone(),
    }
}

/// The canonical four-event history attached to synthesized records:
/// registered → shipped → quality-checked → stocked, in chronological
/// order with fixed reference instants.
pub fn canonical_history() -> Vec<LifecycleEvent> {
    vec![
        LifecycleEvent {
            // 2024-01-10T10:00:00Z
            timestamp: 1_704_880_800,
            actor: ActorRole::Manufacturer,
            action: "BatchRegistered".into(),
            location: "Bern, Switzerland".into(),
            tx_ref: "0xabc...123".into(),
        },
        LifecycleEvent {
            // 2024-01-15T14:30:00Z
            timestamp: 1_705_329_000,
            actor: ActorRole::LogisticsProvider,
            action: "ShipmentReceived".into(),
            location: "Frankfurt, Germany".into(),
            tx_ref: "0xdef...456".into(),
        },
        LifecycleEvent {
            // 2024-01-20T09:15:00Z
            timestamp: 1_705_742_100,
            actor: ActorRole::Distributor,
            action: "QualityCheckPassed".into(),
            location: "London, UK".into(),
            tx_ref: "0xghi...789".into(),
        },
        LifecycleEvent {
            // 2024-01-22T16:45:00Z
            timestamp: 1_705_941_900,
            actor: ActorRole::Pharmacy,
            action: "StockIn".into(),
            location: "New York, USA".into(),
            tx_ref: "0xjkl...012".into(),
        },
    ]
}
