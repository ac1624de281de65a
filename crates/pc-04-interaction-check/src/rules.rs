//! Static interaction rule table
//!
//! Hand-curated pairings of drug-name fragments known to interact. The
//! table order is significant: warnings are emitted in insertion order.

use lazy_static::lazy_static;
use shared_types::Severity;

/// One pairwise interaction rule.
#[derive(Debug, Clone)]
pub struct InteractionRule {
    /// Unordered pair of drug-name fragments.
    pub pair: [&'static str; 2],
    pub severity: Severity,
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Drug-name fragments of the NSAID class, checked by the Warfarin class
/// rule.
pub const NSAID_FRAGMENTS: [&str; 3] = ["ibuprofen", "naproxen", "diclofenac"];

lazy_static! {
    /// The pairwise rule table, loaded once and never mutated.
    pub static ref PAIRWISE_RULES: Vec<InteractionRule> = vec![
        InteractionRule {
            pair: ["Amoxicillin", "Methotrexate"],
            severity: Severity::High,
            description: "Penicillins may reduce the excretion of Methotrexate, \
                          increasing toxicity risk.",
            recommendation: "Monitor for methotrexate toxicity. Consider alternative \
                             antibiotic.",
        },
        InteractionRule {
            pair: ["Atorvastatin", "Clarithromycin"],
            severity: Severity::High,
            description: "Strong CYP3A4 inhibitors increase exposure to Atorvastatin, \
                          raising risk of myopathy/rhabdomyolysis.",
            recommendation: "Suspend Atorvastatin during Clarithromycin treatment or \
                             choose Azithromycin.",
        },
        InteractionRule {
            pair: ["Warfarin", "Aspirin"],
            severity: Severity::High,
            description: "Increased risk of bleeding due to antiplatelet effect added \
                          to anticoagulant effect.",
            recommendation: "Monitor INR closely. Assess need for combined therapy.",
        },
        InteractionRule {
            pair: ["Lisinopril", "Potassium"],
            severity: Severity::Medium,
            description: "Potential for Hyperkalemia.",
            recommendation: "Monitor serum potassium levels.",
        },
        InteractionRule {
            pair: ["Simvastatin", "Amlodipine"],
            severity: Severity::Medium,
            description: "Increased risk of myopathy when Simvastatin is taken with \
                          Amlodipine.",
            recommendation: "Limit Simvastatin dose to 20mg daily.",
        },
        InteractionRule {
            pair: ["Amoxicillin", "Atorvastatin"],
            severity: Severity::Low,
            description: "Minor potential for altered metabolism, generally safe but \
                          worth noting for sensitive patients.",
            recommendation: "Monitor for any unusual muscle pain.",
        },
    ];
}

/// The Warfarin + NSAID class warning, emitted after all pairwise hits.
pub fn warfarin_nsaid_rule() -> InteractionRule {
    InteractionRule {
        pair: ["Warfarin", "NSAIDs"],
        severity: Severity::High,
        description: "NSAIDs can enhance the anticoagulant effect of Warfarin and \
                      damage GI mucosa.",
        recommendation: "Avoid concurrent use. Prefer Acetaminophen/Paracetamol for \
                         analgesia.",
    }
}
