//! Typed configuration model.
//!
//! These types are what the evaluator consumes. They are produced once
//! by [`crate::parse`] from the JSON configuration documents and are
//! immutable for the lifetime of the process; selector sessions share
//! them read-only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

// ──────────────────────────────────────────────
// Decision tree
// ──────────────────────────────────────────────

/// One selectable answer for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: String,
    pub label: String,
}

/// A plain question step. `next_step` names the step the session moves
/// to after this question is answered; `None` means the questionnaire
/// ends and template selection runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionNode {
    pub question: String,
    pub options: Vec<ChoiceOption>,
    pub next_step: Option<String>,
    /// Whether the answer to this step is a multi-select list rather
    /// than a single option id.
    pub multi_select: bool,
}

/// The outcome taken when a branch arm matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub question: String,
    pub options: Vec<ChoiceOption>,
    pub next_step: Option<String>,
    pub template_suggestion: Option<String>,
}

/// One `if`/`elif` arm of a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchArm {
    pub condition: Condition,
    pub outcome: Outcome,
}

/// A conditional step. Arms are evaluated in declared order (`if`
/// first, then each `elif`); the first match wins. When no arm
/// matches, traversal continues at `fallback`, which re-enters the
/// tree -- it is an explicit step id, never an implicit carry-over of
/// the current step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchNode {
    pub arms: Vec<BranchArm>,
    pub fallback: String,
}

/// A decision tree step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Question(QuestionNode),
    Branch(BranchNode),
}

/// The questionnaire decision tree. A step id absent from the map is a
/// terminal: reaching it means the questionnaire is complete and
/// template selection runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecisionTree {
    pub steps: BTreeMap<String, Step>,
    /// Step id the questionnaire starts from.
    pub entry: String,
}

impl DecisionTree {
    pub fn get(&self, step_id: &str) -> Option<&Step> {
        self.steps.get(step_id)
    }
}

// ──────────────────────────────────────────────
// Selection rules
// ──────────────────────────────────────────────

/// A required value in a rule condition: a single scalar, or a set of
/// acceptable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleValue {
    One(String),
    Any(Vec<String>),
}

/// A declarative template-selection rule. Lower `priority` numbers are
/// evaluated first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRule {
    pub priority: u32,
    /// Logical field name -> required value. All entries must match.
    pub conditions: Vec<(String, RuleValue)>,
    pub template: String,
    pub reason: String,
    pub override_flag: bool,
}

// ──────────────────────────────────────────────
// Compatibility matrix and modifications
// ──────────────────────────────────────────────

/// Per-template incompatibility record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompatEntry {
    pub not_compatible_with: Vec<String>,
}

/// Base template id -> incompatible scenario ids. Templates absent
/// from the matrix are trivially compatible with everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompatibilityMatrix {
    pub entries: BTreeMap<String, CompatEntry>,
}

/// A recommended content modification for an active scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modification {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub items: Vec<String>,
}

// ──────────────────────────────────────────────
// Template catalog
// ──────────────────────────────────────────────

/// Descriptive metadata for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Template id -> display metadata. Looked up by id, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateCatalog {
    pub templates: BTreeMap<String, TemplateInfo>,
}

impl TemplateCatalog {
    /// Catalog lookup. `None` for unknown ids -- absence is ordinary,
    /// not a failure.
    pub fn get(&self, template_id: &str) -> Option<&TemplateInfo> {
        self.templates.get(template_id)
    }
}

// ──────────────────────────────────────────────
// Selection logic document
// ──────────────────────────────────────────────

/// The full selection-logic configuration: everything the engine needs
/// besides the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionLogic {
    pub tree: DecisionTree,
    pub rules: Vec<SelectionRule>,
    pub compatibility: CompatibilityMatrix,
    /// Template id -> quick-select keywords, in document order. Order
    /// decides ties: the first template whose keyword matches wins.
    pub quick_keywords: Vec<(String, Vec<String>)>,
    /// Scenario id -> recommended modification, in document order.
    pub modifications: Vec<(String, Modification)>,
}

impl SelectionLogic {
    pub fn modification_for(&self, scenario: &str) -> Option<&Modification> {
        self.modifications
            .iter()
            .find(|(id, _)| id == scenario)
            .map(|(_, m)| m)
    }
}
