//! The collected answer set for one questionnaire session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slate_core::Condition;

/// Answer key under which the multi-select special-scenarios step is
/// recorded.
pub const SCENARIOS_KEY: &str = "step_4_special_scenarios";

/// Answer key under which the tree walker records a branch outcome's
/// template suggestion.
pub const SUGGESTED_TEMPLATE_KEY: &str = "suggested_template";

/// One recorded answer: a single option id, or an ordered list for
/// multi-select steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Multi(Vec<String>),
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(v: Vec<String>) -> Self {
        AnswerValue::Multi(v)
    }
}

/// Mapping from question/step id to the recorded answer. Keys are
/// unique, the set never shrinks, and insertion order is irrelevant to
/// evaluation. Owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        AnswerSet::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Scalar answer under `key`. `None` when absent or multi-valued.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(AnswerValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// List answer under `key`. `None` when absent or scalar.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.0.get(key) {
            Some(AnswerValue::Multi(v)) => Some(v),
            _ => None,
        }
    }

    /// The active special scenarios. Empty when the step has not been
    /// answered (or was answered with a scalar).
    pub fn scenarios(&self) -> &[String] {
        self.list(SCENARIOS_KEY).unwrap_or(&[])
    }

    pub fn suggested_template(&self) -> Option<&str> {
        self.scalar(SUGGESTED_TEMPLATE_KEY)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluate a parsed branch condition against this answer set.
    /// Unsupported conditions and multi-valued answers never match.
    pub fn satisfies(&self, condition: &Condition) -> bool {
        match condition {
            Condition::Eq { field, literal } => self.scalar(field) == Some(literal.as_str()),
            Condition::Unsupported { .. } => false,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
