//! slate-eval: the Slate template selection engine.
//!
//! Given the answers collected through a branching questionnaire, the
//! engine deterministically selects one landing-page template from a
//! catalog using three layers of declarative configuration:
//!
//! 1. a decision tree of question and branch steps that drives the
//!    questionnaire itself,
//! 2. a fixed-priority scenario cascade plus priority-ordered
//!    selection rules, and
//! 3. a compatibility/modification matrix for combining a base
//!    template with special scenarios.
//!
//! Everything here is synchronous, pure computation over an in-memory
//! [`AnswerSet`] and read-only configuration. One [`TemplateSelector`]
//! belongs to one questionnaire session; configuration is shared
//! between sessions via `Arc`.

pub mod answers;
pub mod compat;
pub mod matcher;
pub mod quick;
pub mod selector;
pub mod session;
pub mod types;
pub mod walker;

pub use answers::{AnswerSet, AnswerValue, SCENARIOS_KEY, SUGGESTED_TEMPLATE_KEY};
pub use compat::{check_compatibility, recommended_modifications};
pub use quick::quick_select;
pub use selector::{base_template, run_selection, TemplateSelector};
pub use session::{Phase, SessionState};
pub use types::{Compatibility, Confidence, EvalError, Priority, SelectionResult};

// ──────────────────────────────────────────────
// Integration tests
// ──────────────────────────────────────────────
