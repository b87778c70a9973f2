//! Runtime result types and the evaluation error taxonomy.
//!
//! These types are DISTINCT from the slate-core configuration model:
//! configuration is what the engine reads, these are what it produces.

use std::fmt;

use serde::{Deserialize, Serialize};
use slate_core::ChoiceOption;

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// Errors that can occur while walking the decision tree.
///
/// Deliberately small: malformed conditions are fail-closed (false,
/// not errors), unknown steps are terminals, and selection itself is a
/// total function. What remains is configuration inconsistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The same step was visited twice within one traversal -- the
    /// decision tree's fallback edges form a cycle.
    TreeCycle { step_id: String },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::TreeCycle { step_id } => {
                write!(
                    f,
                    "decision tree cycle: step '{}' revisited within one traversal",
                    step_id
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

// ──────────────────────────────────────────────
// Result types
// ──────────────────────────────────────────────

/// Business priority of a template decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Highest,
    High,
    Medium,
    Low,
}

/// Confidence of a keyword-shortcut match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// The terminal artifact of one selector interaction: either the next
/// question to ask, or a resolved template decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionResult {
    Question {
        question: String,
        options: Vec<ChoiceOption>,
        step_id: String,
    },
    Template {
        template: String,
        reason: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_template: Option<String>,
        #[serde(rename = "override", default)]
        override_flag: bool,
        priority: Priority,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confidence: Option<Confidence>,
    },
}

impl SelectionResult {
    /// Template id if this result is resolved.
    pub fn template_id(&self) -> Option<&str> {
        match self {
            SelectionResult::Template { template, .. } => Some(template),
            SelectionResult::Question { .. } => None,
        }
    }
}

/// Advisory compatibility report for a base template against a set of
/// active scenarios. Never blocks selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    pub compatible: bool,
    pub warnings: Vec<String>,
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
