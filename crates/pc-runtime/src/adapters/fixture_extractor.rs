//! Deterministic extraction adapter
//!
//! Stands in for the external recognition service: every image yields the
//! same two-medication prescription, including a low-confidence OCR read on
//! the second line so downstream confidence handling stays exercised.

use crate::error::{EngineError, EngineResult};
use crate::ports::extraction::PrescriptionExtractor;
use async_trait::async_trait;
use shared_types::{ExtractedMedication, ExtractedPrescription, FieldReading};

/// Fixture-backed extractor.
pub struct FixtureExtractor;

#[async_trait]
impl PrescriptionExtractor for FixtureExtractor {
    async fn extract(&self, image: &[u8]) -> EngineResult<ExtractedPrescription> {
        if image.is_empty() {
            return Err(EngineError::Extraction {
                reason: "empty image".into(),
            });
        }

        Ok(ExtractedPrescription {
            patient_name: FieldReading {
                value: "John Doe".into(),
                confidence: 0.98,
            },
            prescriber: FieldReading {
                value: "Dr. Sarah Smith".into(),
                confidence: 0.99,
            },
            medications: vec![
                ExtractedMedication {
                    raw_text: "Amox 500mg tds x5d".into(),
                    normalized_name: "Amoxicillin".into(),
                    strength: "500 mg".into(),
                    form: "tablet".into(),
                    frequency: "TDS".into(),
                    duration: "5 days".into(),
                    ocr_confidence: 0.95,
                    entity_confidence: 0.92,
                },
                ExtractedMedication {
                    raw_text: "Lipitor 20mg 1 daily".into(),
                    normalized_name: "Atorvastatin".into(),
                    strength: "20 mg".into(),
                    form: "tablet".into(),
                    frequency: "OD".into(),
                    duration: "30 days".into(),
                    ocr_confidence: 0.65,
                    entity_confidence: 0.80,
                },
            ],
            warnings: vec!["ocr_low_confidence_med_2".into()],
        })
    }
}
