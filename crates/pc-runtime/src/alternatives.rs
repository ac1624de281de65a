//! Equivalent-medicine catalog
//!
//! A small static catalog of substitutable medicines, queried at review
//! time. Candidates come back sorted by equivalence score (desc), then
//! in-stock first, then price (asc).

use serde::{Deserialize, Serialize};

/// One substitutable medicine candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeMedicine {
    pub medicine_id: String,
    pub brand: String,
    pub generic_name: String,
    /// Same active pharmaceutical ingredient as the queried medicine.
    pub same_api: bool,
    /// Therapeutic equivalence in `0.0..=1.0`.
    pub equivalence_score: f64,
    pub estimated_price: f64,
    pub currency: String,
    pub in_stock: bool,
    pub manufacturer: String,
    pub form: String,
}

fn catalog() -> Vec<AlternativeMedicine> {
    vec![
        AlternativeMedicine {
            medicine_id: "med_gen_001".into(),
            brand: "Generic Amoxicillin".into(),
            generic_name: "Amoxicillin".into(),
            same_api: true,
            equivalence_score: 1.0,
            estimated_price: 8.50,
            currency: "USD".into(),
            in_stock: true,
            manufacturer: "HealthCorp Generics".into(),
            form: "Tablet".into(),
        },
        AlternativeMedicine {
            medicine_id: "med_brand_002".into(),
            brand: "Amoxil".into(),
            generic_name: "Amoxicillin".into(),
            same_api: true,
            equivalence_score: 1.0,
            estimated_price: 24.00,
            currency: "USD".into(),
            in_stock: true,
            manufacturer: "BigPharma Inc.".into(),
            form: "Tablet".into(),
        },
        AlternativeMedicine {
            medicine_id: "med_alt_003".into(),
            brand: "Augmentin".into(),
            generic_name: "Amoxicillin / Clavulanate".into(),
            same_api: false,
            equivalence_score: 0.92,
            estimated_price: 35.00,
            currency: "USD".into(),
            in_stock: false,
            manufacturer: "Global Meds".into(),
            form: "Tablet".into(),
        },
    ]
}

/// Substitution candidates for a medicine, best first.
///
/// Statin queries remap the catalog's generic family; everything else gets
/// the default amoxicillin family.
pub fn alternatives_for(medicine_name: &str) -> Vec<AlternativeMedicine> {
    let mut results = catalog();

    if medicine_name.to_lowercase().contains("stat") {
        for r in &mut results {
            r.generic_name = "Atorvastatin".into();
            r.brand = r.brand.replace("Amox", "Lipit");
        }
    }

    results.sort_by(|a, b| {
        b.equivalence_score
            .partial_cmp(&a.equivalence_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.in_stock.cmp(&a.in_stock))
            .then_with(|| {
                a.estimated_price
                    .partial_cmp(&b.estimated_price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    results
}
