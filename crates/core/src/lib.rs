//! slate-core: configuration model for the Slate template selection engine.
//!
//! Parses the two configuration documents the engine consumes -- the
//! template catalog and the selection-logic document (decision tree,
//! selection rules, compatibility matrix, quick-select keywords,
//! scenario modifications) -- into typed, read-only structures.
//!
//! Condition expressions are parsed once here, at load time, into a
//! structured [`Condition`]; the evaluator never re-parses strings.
//!
//! # Public API
//!
//! - [`SelectionLogic::from_json`] / [`TemplateCatalog::from_json`] --
//!   deserialize configuration documents
//! - [`validate()`] -- structural consistency checks over a loaded logic
//!   document
//! - [`ConfigError`] -- configuration load error type

pub mod condition;
pub mod error;
pub mod model;
pub mod parse;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use condition::Condition;
pub use error::ConfigError;
pub use model::{
    BranchArm, BranchNode, ChoiceOption, CompatibilityMatrix, DecisionTree, Modification, Outcome,
    QuestionNode, RuleValue, SelectionLogic, SelectionRule, Step, TemplateCatalog, TemplateInfo,
};
pub use validate::{validate, ValidationIssue};
