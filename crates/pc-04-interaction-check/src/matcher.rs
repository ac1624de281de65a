//! Rule evaluation over supplied medication names

use crate::error::{InteractionError, InteractionResult};
use crate::rules::{warfarin_nsaid_rule, InteractionRule, NSAID_FRAGMENTS, PAIRWISE_RULES};
use shared_types::InteractionWarning;

/// True when `fragment` appears (case-insensitively) in at least one of the
/// lowercased names.
fn any_contains(names: &[String], fragment: &str) -> bool {
    let fragment = fragment.to_lowercase();
    names.iter().any(|name| name.contains(&fragment))
}

fn warning_from(rule: &InteractionRule) -> InteractionWarning {
    InteractionWarning {
        pair: [rule.pair[0].to_string(), rule.pair[1].to_string()],
        severity: rule.severity,
        description: rule.description.to_string(),
        recommendation: rule.recommendation.to_string(),
    }
}

/// Evaluate all applicable interaction rules against the supplied
/// medication names.
///
/// A pairwise rule fires when each of its two fragments is a substring of
/// at least one name; dose and brand suffixes (`Warfarin 5mg`) therefore
/// match. Warnings come out in table order, the Warfarin/NSAID class
/// warning last. Overlapping pairs are not deduplicated beyond rule
/// identity.
pub fn check(medications: &[String]) -> InteractionResult<Vec<InteractionWarning>> {
    if medications.is_empty() {
        return Err(InteractionError::InvalidInput {
            reason: "empty medication list".into(),
        });
    }

    let names: Vec<String> = medications.iter().map(|m| m.to_lowercase()).collect();

    let mut warnings: Vec<InteractionWarning> = PAIRWISE_RULES
        .iter()
        .filter(|rule| any_contains(&names, rule.pair[0]) && any_contains(&names, rule.pair[1]))
        .map(warning_from)
        .collect();

    let has_warfarin = any_contains(&names, "warfarin");
    let has_nsaid = NSAID_FRAGMENTS.iter().any(|f| any_contains(&names, f));
    if has_warfarin && has_nsaid {
        warnings.push(warning_from(&warfarin_nsaid_rule()));
    }

    Ok(warnings)
}

/// True when any warning must block a dispense action.
pub fn has_blocking(warnings: &[InteractionWarning]) -> bool {
    warnings.iter().any(|w| w.severity.is_blocking())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Severity;

    fn meds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn warfarin_ibuprofen_emits_class_warning() {
        let warnings = check(&meds(&["Warfarin 5mg", "Ibuprofen 200mg"])).unwrap();
        let class = warnings
            .iter()
            .find(|w| w.pair == ["Warfarin".to_string(), "NSAIDs".to_string()])
            .expect("class warning present");
        assert_eq!(class.severity, Severity::High);
        assert!(has_blocking(&warnings));
    }

    #[test]
    fn amoxicillin_methotrexate_is_exactly_one_high() {
        let warnings = check(&meds(&["Amoxicillin 500mg", "Methotrexate 2.5mg"])).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::High);
        assert_eq!(
            warnings[0].pair,
            ["Amoxicillin".to_string(), "Methotrexate".to_string()]
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_suffix_tolerant() {
        let warnings = check(&meds(&["warfarin sodium", "ASPIRIN 81MG"])).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].pair,
            ["Warfarin".to_string(), "Aspirin".to_string()]
        );
    }

    #[test]
    fn output_follows_table_order_with_class_rule_last() {
        let warnings = check(&meds(&[
            "Warfarin 5mg",
            "Aspirin 81mg",
            "Ibuprofen 200mg",
            "Amoxicillin 500mg",
            "Atorvastatin 20mg",
        ]))
        .unwrap();
        let pairs: Vec<[String; 2]> = warnings.iter().map(|w| w.pair.clone()).collect();
        assert_eq!(
            pairs,
            vec![
                ["Warfarin".to_string(), "Aspirin".to_string()],
                ["Amoxicillin".to_string(), "Atorvastatin".to_string()],
                ["Warfarin".to_string(), "NSAIDs".to_string()],
            ]
        );
    }

    #[test]
    fn single_medication_triggers_nothing() {
        let warnings = check(&meds(&["Amoxicillin 500mg"])).unwrap();
        assert!(warnings.is_empty());
        assert!(!has_blocking(&warnings));
    }

    #[test]
    fn medium_severity_does_not_block() {
        let warnings = check(&meds(&["Lisinopril 10mg", "Potassium Chloride"])).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Medium);
        assert!(!has_blocking(&warnings));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            check(&[]),
            Err(InteractionError::InvalidInput { .. })
        ));
    }
}
