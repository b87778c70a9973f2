//! Decision tree walker.
//!
//! A walk is a pure transition: `(tree, state) -> (state', outcome)`.
//! Steps absent from the tree are terminals (the questionnaire is
//! complete); branch arms are tried in declared order and the first
//! match wins; when no arm matches, traversal continues at the
//! branch's explicit fallback step. Fallback chains may pass through
//! several branches before reaching a question, so each resolution
//! keeps a visited set -- revisiting a step id means the configuration
//! contains a cycle, which is surfaced as an error rather than looped.

use std::collections::BTreeSet;

use slate_core::{ChoiceOption, DecisionTree, Step};

use crate::answers::{AnswerValue, SUGGESTED_TEMPLATE_KEY};
use crate::session::{Phase, SessionState};
use crate::types::EvalError;

/// What one walk produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The next question to put to the user, labeled with the step id
    /// its answer should be recorded under.
    Ask {
        question: String,
        options: Vec<ChoiceOption>,
        step_id: String,
    },
    /// The tree is exhausted; template selection should run.
    SelectNow,
}

/// Record an answer and move the step pointer past the answered
/// question. Only plain question steps carry their own `next_step`;
/// when the current step is a branch, the pointer is left alone and
/// the next [`resolve`] re-evaluates the branch with the new answer.
pub fn record_answer(
    tree: &DecisionTree,
    mut state: SessionState,
    question_id: &str,
    answer: AnswerValue,
) -> SessionState {
    state.answers.insert(question_id, answer);

    if state.phase != Phase::Questioning {
        return state;
    }

    if let Some(Step::Question(q)) = tree.get(&state.current_step) {
        match &q.next_step {
            Some(next) => state.current_step = next.clone(),
            None => state.phase = Phase::Selecting,
        }
    }
    state
}

/// Walk the tree from the current step until a question or terminal is
/// reached.
pub fn resolve(
    tree: &DecisionTree,
    mut state: SessionState,
) -> Result<(SessionState, WalkOutcome), EvalError> {
    if state.phase != Phase::Questioning {
        return Ok((state, WalkOutcome::SelectNow));
    }

    let mut visited = BTreeSet::new();
    loop {
        if !visited.insert(state.current_step.clone()) {
            return Err(EvalError::TreeCycle {
                step_id: state.current_step,
            });
        }

        match tree.get(&state.current_step) {
            None => {
                state.phase = Phase::Selecting;
                return Ok((state, WalkOutcome::SelectNow));
            }

            Some(Step::Question(q)) => {
                let outcome = WalkOutcome::Ask {
                    question: q.question.clone(),
                    options: q.options.clone(),
                    step_id: state.current_step.clone(),
                };
                return Ok((state, outcome));
            }

            Some(Step::Branch(branch)) => {
                let matched = branch
                    .arms
                    .iter()
                    .find(|arm| state.answers.satisfies(&arm.condition));

                match matched {
                    Some(arm) => {
                        if let Some(suggestion) = &arm.outcome.template_suggestion {
                            state
                                .answers
                                .insert(SUGGESTED_TEMPLATE_KEY, suggestion.as_str());
                        }
                        if let Some(next) = &arm.outcome.next_step {
                            state.current_step = next.clone();
                        }
                        let outcome = WalkOutcome::Ask {
                            question: arm.outcome.question.clone(),
                            options: arm.outcome.options.clone(),
                            step_id: state.current_step.clone(),
                        };
                        return Ok((state, outcome));
                    }
                    None => {
                        // Explicit fallback target; never a stale pointer.
                        state.current_step = branch.fallback.clone();
                    }
                }
            }
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
