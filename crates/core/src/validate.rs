//! Structural validation of a loaded selection-logic document.
//!
//! These checks run once after load, before any session uses the
//! configuration. Inconsistencies here are authoring defects, not user
//! input problems: a branch fallback that loops, a rule naming a
//! template the catalog does not know, an entry step that does not
//! exist.
//!
//! Cycle detection only follows fallback edges between branch steps.
//! Arms and question steps always surface a question, so traversal
//! through them consumes an answer and cannot spin.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::{DecisionTree, SelectionLogic, Step, TemplateCatalog};

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration can misbehave at runtime (loops, dead entry).
    Error,
    /// Suspicious but harmless (unknown template references).
    Warning,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub context: String,
    pub message: String,
}

impl ValidationIssue {
    fn error(context: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Error,
            context: context.into(),
            message: message.into(),
        }
    }

    fn warning(context: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            severity: Severity::Warning,
            context: context.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}: {}", tag, self.context, self.message)
    }
}

/// Validate a logic document, optionally cross-checking template
/// references against a catalog. Returns an empty vec when clean.
pub fn validate(logic: &SelectionLogic, catalog: Option<&TemplateCatalog>) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_entry(&logic.tree, &mut issues);
    check_fallback_cycles(&logic.tree, &mut issues);

    if let Some(catalog) = catalog {
        for rule in &logic.rules {
            if catalog.get(&rule.template).is_none() {
                issues.push(ValidationIssue::warning(
                    "template_selection",
                    format!("rule targets unknown template '{}'", rule.template),
                ));
            }
        }
        for (template, _) in &logic.quick_keywords {
            if catalog.get(template).is_none() {
                issues.push(ValidationIssue::warning(
                    "quick_selection",
                    format!("keywords reference unknown template '{}'", template),
                ));
            }
        }
    }

    issues
}

fn check_entry(tree: &DecisionTree, issues: &mut Vec<ValidationIssue>) {
    if !tree.steps.is_empty() && tree.get(&tree.entry).is_none() {
        issues.push(ValidationIssue::error(
            "decision_tree",
            format!(
                "entry step '{}' is not defined; every session would skip straight to selection",
                tree.entry
            ),
        ));
    }
}

/// Follow fallback edges from every branch step. A chain that revisits
/// a step can loop at runtime without ever consuming an answer.
fn check_fallback_cycles(tree: &DecisionTree, issues: &mut Vec<ValidationIssue>) {
    for (step_id, step) in &tree.steps {
        let branch = match step {
            Step::Branch(b) => b,
            Step::Question(_) => continue,
        };

        if branch.fallback == *step_id {
            issues.push(ValidationIssue::error(
                format!("decision_tree.{}", step_id),
                "branch fallback points to itself".to_string(),
            ));
            continue;
        }

        let mut visited = BTreeSet::new();
        visited.insert(step_id.clone());
        let mut current = branch.fallback.clone();
        loop {
            if !visited.insert(current.clone()) {
                issues.push(ValidationIssue::error(
                    format!("decision_tree.{}", step_id),
                    format!("fallback chain revisits step '{}'", current),
                ));
                break;
            }
            match tree.get(&current) {
                Some(Step::Branch(next)) => current = next.fallback.clone(),
                // Question or terminal: an answer gets consumed, chain ends.
                _ => break,
            }
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
