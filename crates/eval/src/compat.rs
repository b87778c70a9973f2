//! Compatibility checks and recommended modifications.
//!
//! Both are advisory. An incompatibility never blocks selection; it is
//! surfaced so the caller can warn the user or adjust the page.

use slate_core::{CompatibilityMatrix, Modification, SelectionLogic};

use crate::types::Compatibility;

/// Check a base template against the active scenarios. Templates
/// absent from the matrix are trivially compatible.
pub fn check_compatibility(
    matrix: &CompatibilityMatrix,
    base_template: &str,
    scenarios: &[String],
) -> Compatibility {
    let entry = match matrix.entries.get(base_template) {
        Some(entry) => entry,
        None => {
            return Compatibility {
                compatible: true,
                warnings: Vec::new(),
            }
        }
    };

    let warnings: Vec<String> = scenarios
        .iter()
        .filter(|s| entry.not_compatible_with.contains(s))
        .map(|s| {
            format!(
                "template '{}' is not compatible with scenario '{}'",
                base_template, s
            )
        })
        .collect();

    Compatibility {
        compatible: warnings.is_empty(),
        warnings,
    }
}

/// Recommended content modifications for the active scenarios, in the
/// modification table's declared order. Keyed dispatch over scenario
/// id: new scenario -> modification pairs are pure configuration.
pub fn recommended_modifications(
    logic: &SelectionLogic,
    _template_id: &str,
    scenarios: &[String],
) -> Vec<Modification> {
    logic
        .modifications
        .iter()
        .filter(|(scenario, _)| scenarios.iter().any(|s| s == scenario))
        .map(|(_, modification)| modification.clone())
        .collect()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn logic() -> SelectionLogic {
        SelectionLogic::from_json(&json!({
            "decision_tree": {},
            "compatibility_matrix": {
                "matrix": {
                    "b2b": { "not_compatible_with": ["limited_offer", "seasonal"] }
                }
            }
        }))
        .unwrap()
    }

    fn scenarios(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn listed_conflict_produces_one_named_warning() {
        let l = logic();
        let report = check_compatibility(&l.compatibility, "b2b", &scenarios(&["limited_offer"]));
        assert!(!report.compatible);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("b2b"));
        assert!(report.warnings[0].contains("limited_offer"));
    }

    #[test]
    fn multiple_conflicts_produce_one_warning_each() {
        let l = logic();
        let report = check_compatibility(
            &l.compatibility,
            "b2b",
            &scenarios(&["limited_offer", "seasonal", "pre_order"]),
        );
        assert!(!report.compatible);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn unlisted_template_is_trivially_compatible() {
        let l = logic();
        let report = check_compatibility(
            &l.compatibility,
            "physical_single",
            &scenarios(&["limited_offer"]),
        );
        assert!(report.compatible);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn non_conflicting_scenarios_are_compatible() {
        let l = logic();
        let report = check_compatibility(&l.compatibility, "b2b", &scenarios(&["pre_order"]));
        assert!(report.compatible);
    }

    #[test]
    fn default_modifications_for_seasonal_and_limited_offer() {
        let l = logic();

        let mods = recommended_modifications(&l, "physical_single", &scenarios(&["seasonal"]));
        assert_eq!(mods.len(), 1);
        assert_eq!(mods[0].kind, "design");

        let mods = recommended_modifications(
            &l,
            "physical_single",
            &scenarios(&["limited_offer", "seasonal"]),
        );
        // Table order, not caller order: design before urgency.
        assert_eq!(mods.len(), 2);
        assert_eq!(mods[0].kind, "design");
        assert_eq!(mods[1].kind, "urgency");
        assert!(mods[1].items.contains(&"countdown_timer".to_string()));
    }

    #[test]
    fn unmapped_scenarios_yield_no_modifications() {
        let l = logic();
        let mods = recommended_modifications(&l, "physical_single", &scenarios(&["b2b"]));
        assert!(mods.is_empty());
    }
}
