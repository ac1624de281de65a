//! Identifier minting
//!
//! Mints the opaque string identifiers used across subsystems: content
//! identifiers and transaction references. Each identifier is the hex of a
//! SHA-256 digest over the caller's payload plus a fresh UUID, so minted
//! identifiers are unique even for identical payloads.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Mint a content identifier (`Qm` + 44 hex chars).
///
/// The digest covers the serialized record plus fresh entropy: same content
/// does not collide with itself across mints, and distinct content never
/// shares an identifier.
pub fn mint_content_id(payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hasher.update(Uuid::new_v4().as_bytes());
    let digest = hasher.finalize();
    format!("Qm{}", hex::encode(&digest[..22]))
}

/// Mint a transaction reference (`0x` + 40 hex chars).
pub fn mint_tx_ref() -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"tx");
    hasher.update(Uuid::new_v4().as_bytes());
    let digest = hasher.finalize();
    format!("0x{}", hex::encode(&digest[..20]))
}
