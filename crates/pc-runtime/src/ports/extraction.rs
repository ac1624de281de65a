//! Driven Port: the external prescription extraction service
//!
//! The engine consumes structured extraction results; recognition itself is
//! outside this system and reached through this port.

use crate::error::EngineResult;
use async_trait::async_trait;
use shared_types::ExtractedPrescription;

/// External extraction capability.
///
/// Given prescription image bytes, returns the structured medication
/// records with per-field confidence scores.
#[async_trait]
pub trait PrescriptionExtractor: Send + Sync {
    async fn extract(&self, image: &[u8]) -> EngineResult<ExtractedPrescription>;
}
