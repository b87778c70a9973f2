//! The template selector: session facade and selection cascade.
//!
//! Selection runs a fixed-priority ladder. Scenario-driven special
//! cases outrank declarative rules, which outrank the structural
//! default; B2B and pre-order are business commitments and must never
//! be overridden by generic rules. The final structural fallback makes
//! selection a total function -- every answer set resolves to some
//! template.

use std::sync::Arc;

use slate_core::{SelectionLogic, TemplateCatalog, TemplateInfo};

use crate::answers::{AnswerSet, AnswerValue};
use crate::compat::{check_compatibility, recommended_modifications};
use crate::matcher::rule_matches;
use crate::quick::quick_select;
use crate::session::{Phase, SessionState};
use crate::types::{Compatibility, EvalError, Priority, SelectionResult};
use crate::walker::{self, WalkOutcome};

/// Derive the base template from the structural answers alone, before
/// any scenario override. Business model is consulted before price
/// range; unmapped or missing product types fall back to the generic
/// single-product template.
pub fn base_template(answers: &AnswerSet) -> &'static str {
    match answers.scalar("step_1_product_type") {
        Some("physical_product") => match answers.scalar("step_2_business_model") {
            Some("variants") => "physical_multi",
            Some("dropshipping") => "physical_dropshipping",
            _ => match answers.scalar("step_3_price_range") {
                Some("low") => "low_price_impulse",
                Some("medium") => "medium_price_justified",
                Some("high") => "high_price_detailed",
                _ => "physical_single",
            },
        },
        Some("service") => "service_consultation",
        Some("digital_product") => "digital_course",
        _ => "physical_single",
    }
}

/// Run the selection cascade over a completed answer set.
///
/// Ladder, first match wins:
/// 1. `b2b` scenario
/// 2. `pre_order` scenario
/// 3. `limited_offer` scenario, carrying the derived base template
/// 4. a `suggested_template` recorded by the tree walker
/// 5. rules in ascending priority order
/// 6. the structural base template
pub fn run_selection(logic: &SelectionLogic, answers: &AnswerSet) -> SelectionResult {
    let scenarios = answers.scenarios();

    if scenarios.iter().any(|s| s == "b2b") {
        return template_result(
            "b2b",
            "B2B sales require a dedicated template",
            Priority::Highest,
        );
    }

    if scenarios.iter().any(|s| s == "pre_order") {
        return template_result(
            "pre_order",
            "pre-orders require a dedicated template",
            Priority::High,
        );
    }

    if scenarios.iter().any(|s| s == "limited_offer") {
        return SelectionResult::Template {
            template: "limited_offer".to_string(),
            reason: "limited offer with urgency elements".to_string(),
            base_template: Some(base_template(answers).to_string()),
            override_flag: false,
            priority: Priority::High,
            confidence: None,
        };
    }

    if let Some(suggested) = answers.suggested_template() {
        return template_result(
            suggested,
            "template determined by product type",
            Priority::Medium,
        );
    }

    apply_rules(logic, answers)
}

/// Rule-based selection with the structural fallback. Rules are tried
/// in ascending priority order (stable, so declaration order breaks
/// ties).
fn apply_rules(logic: &SelectionLogic, answers: &AnswerSet) -> SelectionResult {
    let mut rules: Vec<_> = logic.rules.iter().collect();
    rules.sort_by_key(|r| r.priority);

    for rule in rules {
        if rule_matches(rule, answers) {
            return SelectionResult::Template {
                template: rule.template.clone(),
                reason: rule.reason.clone(),
                base_template: None,
                override_flag: rule.override_flag,
                priority: Priority::Medium,
                confidence: None,
            };
        }
    }

    SelectionResult::Template {
        template: base_template(answers).to_string(),
        reason: "default base template for the collected answers".to_string(),
        base_template: None,
        override_flag: false,
        priority: Priority::Low,
        confidence: None,
    }
}

fn template_result(template: &str, reason: &str, priority: Priority) -> SelectionResult {
    SelectionResult::Template {
        template: template.to_string(),
        reason: reason.to_string(),
        base_template: None,
        override_flag: false,
        priority,
        confidence: None,
    }
}

// ──────────────────────────────────────────────
// Session facade
// ──────────────────────────────────────────────

/// One user's questionnaire session over shared, read-only
/// configuration. Never share an instance between logical sessions;
/// the configuration `Arc`s may be shared freely.
#[derive(Debug, Clone)]
pub struct TemplateSelector {
    logic: Arc<SelectionLogic>,
    catalog: Arc<TemplateCatalog>,
    state: SessionState,
}

impl TemplateSelector {
    pub fn new(logic: Arc<SelectionLogic>, catalog: Arc<TemplateCatalog>) -> Self {
        let state = SessionState::new(logic.tree.entry.clone());
        TemplateSelector {
            logic,
            catalog,
            state,
        }
    }

    /// Record an answer and return the next question, or the final
    /// decision once the tree is exhausted.
    pub fn set_answer(
        &mut self,
        question_id: &str,
        answer: impl Into<AnswerValue>,
    ) -> Result<SelectionResult, EvalError> {
        self.state = walker::record_answer(
            &self.logic.tree,
            self.state.clone(),
            question_id,
            answer.into(),
        );
        self.next_question()
    }

    /// The current question, or the final decision once the tree is
    /// exhausted. Idempotent between answers.
    pub fn next_question(&mut self) -> Result<SelectionResult, EvalError> {
        let (state, outcome) = walker::resolve(&self.logic.tree, self.state.clone())?;
        self.state = state;

        match outcome {
            WalkOutcome::Ask {
                question,
                options,
                step_id,
            } => Ok(SelectionResult::Question {
                question,
                options,
                step_id,
            }),
            WalkOutcome::SelectNow => Ok(self.select_template()),
        }
    }

    /// Run the selection cascade over the answers collected so far and
    /// mark the session resolved. Total: always yields a template.
    pub fn select_template(&mut self) -> SelectionResult {
        let result = run_selection(&self.logic, &self.state.answers);
        self.state.phase = Phase::Resolved;
        result
    }

    /// Keyword shortcut past the questionnaire. Does not touch session
    /// state.
    pub fn quick_select(&self, text: &str) -> Option<SelectionResult> {
        quick_select(&self.logic, text)
    }

    /// Advisory compatibility report for a base template against a
    /// scenario set.
    pub fn check_compatibility(&self, base_template: &str, scenarios: &[String]) -> Compatibility {
        check_compatibility(&self.logic.compatibility, base_template, scenarios)
    }

    /// Recommended content modifications for the active scenarios.
    pub fn recommended_modifications(
        &self,
        template_id: &str,
        scenarios: &[String],
    ) -> Vec<slate_core::Modification> {
        recommended_modifications(&self.logic, template_id, scenarios)
    }

    /// Catalog lookup; `None` for unknown template ids.
    pub fn template_info(&self, template_id: &str) -> Option<&TemplateInfo> {
        self.catalog.get(template_id)
    }

    /// Current session state, for external persistence.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Resume a previously persisted session.
    pub fn restore(&mut self, state: SessionState) {
        self.state = state;
    }

    /// Discard all answers and start over at the entry step.
    pub fn reset(&mut self) {
        self.state = SessionState::new(self.logic.tree.entry.clone());
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
