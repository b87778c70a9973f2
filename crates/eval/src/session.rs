//! Explicit, serializable session state.
//!
//! One `SessionState` belongs to one in-progress questionnaire. The
//! engine never keeps hidden mutable fields: the walker consumes a
//! state and returns a new one, so the caller's persistence layer can
//! park a session as JSON and resume it after a process restart.

use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The decision tree still has questions to ask.
    Questioning,
    /// The tree is exhausted; template selection should run.
    Selecting,
    /// A template decision has been produced.
    Resolved,
}

/// The full state of one questionnaire session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub current_step: String,
    pub answers: AnswerSet,
    pub phase: Phase,
}

impl SessionState {
    /// Fresh session positioned at the tree's entry step.
    pub fn new(entry_step: impl Into<String>) -> Self {
        SessionState {
            current_step: entry_step.into(),
            answers: AnswerSet::new(),
            phase: Phase::Questioning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_state_round_trips_through_json() {
        let mut state = SessionState::new("step_1_product_type");
        state.answers.insert("step_1_product_type", "service");
        state.phase = Phase::Selecting;

        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.phase, Phase::Selecting);
    }
}
