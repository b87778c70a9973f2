//! Selection rule matching.
//!
//! Rules are written against logical field names (`product_type`,
//! `business_model`, ...); answers are recorded under step-prefixed
//! keys. The mapping between the two is a static table here -- rule
//! authors never build answer keys by hand.

use slate_core::{RuleValue, SelectionRule};

use crate::answers::{AnswerSet, AnswerValue};

/// Logical rule field -> answer key. Unlisted fields belong to the
/// step-4 group; a bare-key lookup is the final fallback either way.
const FIELD_KEYS: &[(&str, &str)] = &[
    ("product_type", "step_1_product_type"),
    ("business_model", "step_2_business_model"),
    ("price_range", "step_3_price_range"),
];

pub fn field_key(field: &str) -> String {
    for (name, key) in FIELD_KEYS {
        if *name == field {
            return (*key).to_string();
        }
    }
    format!("step_4_{}", field)
}

fn lookup<'a>(answers: &'a AnswerSet, field: &str) -> Option<&'a AnswerValue> {
    answers
        .get(&field_key(field))
        .or_else(|| answers.get(field))
}

/// Whether every condition of `rule` holds against `answers`
/// (logical AND).
pub fn rule_matches(rule: &SelectionRule, answers: &AnswerSet) -> bool {
    rule.conditions
        .iter()
        .all(|(field, required)| condition_matches(field, required, answers))
}

fn condition_matches(field: &str, required: &RuleValue, answers: &AnswerSet) -> bool {
    match required {
        RuleValue::One(value) => match lookup(answers, field) {
            Some(AnswerValue::Text(answer)) => answer == value,
            _ => false,
        },

        // The special-scenarios field is multi-valued: an empty
        // required set means "no scenarios active", a non-empty one
        // matches on set intersection.
        RuleValue::Any(values) if field == "special_scenarios" => {
            let active = answers.scenarios();
            if values.is_empty() {
                active.is_empty()
            } else {
                values.iter().any(|v| active.contains(v))
            }
        }

        // Other set conditions are membership tests on a scalar answer.
        RuleValue::Any(values) => match lookup(answers, field) {
            Some(AnswerValue::Text(answer)) => values.contains(answer),
            _ => false,
        },
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::SCENARIOS_KEY;

    fn rule(conditions: Vec<(&str, RuleValue)>) -> SelectionRule {
        SelectionRule {
            priority: 1,
            conditions: conditions
                .into_iter()
                .map(|(f, v)| (f.to_string(), v))
                .collect(),
            template: "t".to_string(),
            reason: "r".to_string(),
            override_flag: false,
        }
    }

    fn one(v: &str) -> RuleValue {
        RuleValue::One(v.to_string())
    }

    fn any(vs: &[&str]) -> RuleValue {
        RuleValue::Any(vs.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn field_keys_map_to_step_prefixed_answers() {
        assert_eq!(field_key("product_type"), "step_1_product_type");
        assert_eq!(field_key("business_model"), "step_2_business_model");
        assert_eq!(field_key("price_range"), "step_3_price_range");
        assert_eq!(field_key("special_scenarios"), "step_4_special_scenarios");
        assert_eq!(field_key("delivery_time"), "step_4_delivery_time");
    }

    #[test]
    fn scalar_condition_requires_exact_equality() {
        let mut answers = AnswerSet::new();
        answers.insert("step_1_product_type", "physical_product");

        assert!(rule_matches(
            &rule(vec![("product_type", one("physical_product"))]),
            &answers
        ));
        assert!(!rule_matches(
            &rule(vec![("product_type", one("service"))]),
            &answers
        ));
    }

    #[test]
    fn bare_key_is_the_lookup_fallback() {
        let mut answers = AnswerSet::new();
        answers.insert("product_type", "service");

        assert!(rule_matches(
            &rule(vec![("product_type", one("service"))]),
            &answers
        ));
    }

    #[test]
    fn set_condition_is_membership() {
        let mut answers = AnswerSet::new();
        answers.insert("step_3_price_range", "medium");

        assert!(rule_matches(
            &rule(vec![("price_range", any(&["low", "medium"]))]),
            &answers
        ));
        assert!(!rule_matches(
            &rule(vec![("price_range", any(&["high"]))]),
            &answers
        ));
    }

    #[test]
    fn scenario_set_matches_on_intersection() {
        let mut answers = AnswerSet::new();
        answers.insert(
            SCENARIOS_KEY,
            vec!["seasonal".to_string(), "pre_order".to_string()],
        );

        // Intersection, not subset: one shared scenario is enough.
        assert!(rule_matches(
            &rule(vec![("special_scenarios", any(&["pre_order", "b2b"]))]),
            &answers
        ));
        assert!(!rule_matches(
            &rule(vec![("special_scenarios", any(&["b2b"]))]),
            &answers
        ));
    }

    #[test]
    fn empty_scenario_set_requires_no_active_scenarios() {
        let empty = AnswerSet::new();
        assert!(rule_matches(
            &rule(vec![("special_scenarios", any(&[]))]),
            &empty
        ));

        let mut active = AnswerSet::new();
        active.insert(SCENARIOS_KEY, vec!["b2b".to_string()]);
        assert!(!rule_matches(
            &rule(vec![("special_scenarios", any(&[]))]),
            &active
        ));
    }

    #[test]
    fn all_conditions_must_hold() {
        let mut answers = AnswerSet::new();
        answers.insert("step_1_product_type", "physical_product");
        answers.insert("step_3_price_range", "high");

        assert!(rule_matches(
            &rule(vec![
                ("product_type", one("physical_product")),
                ("price_range", any(&["high"])),
            ]),
            &answers
        ));
        assert!(!rule_matches(
            &rule(vec![
                ("product_type", one("physical_product")),
                ("price_range", any(&["low"])),
            ]),
            &answers
        ));
    }

    #[test]
    fn missing_answer_fails_scalar_and_set_conditions() {
        let answers = AnswerSet::new();
        assert!(!rule_matches(
            &rule(vec![("product_type", one("service"))]),
            &answers
        ));
        assert!(!rule_matches(
            &rule(vec![("price_range", any(&["low"]))]),
            &answers
        ));
    }

    #[test]
    fn empty_conditions_always_match() {
        let answers = AnswerSet::new();
        assert!(rule_matches(&rule(vec![]), &answers));
    }
}
