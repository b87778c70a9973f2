//! Keyword-based quick selection.
//!
//! A shortcut past the questionnaire: free text is matched against
//! each template's keyword list by case-insensitive substring search.
//! The first template (in the document's declared order) with any
//! matching keyword wins. Pure and side-effect-free -- never touches
//! session state.

use slate_core::SelectionLogic;

use crate::types::{Confidence, Priority, SelectionResult};

/// Match free text against the quick-select keyword lists. `None`
/// means the caller must fall back to the full questionnaire.
pub fn quick_select(logic: &SelectionLogic, text: &str) -> Option<SelectionResult> {
    let haystack = text.to_lowercase();

    for (template, keywords) in &logic.quick_keywords {
        let hit = keywords
            .iter()
            .find(|kw| haystack.contains(&kw.to_lowercase()));
        if let Some(keyword) = hit {
            return Some(SelectionResult::Template {
                template: template.clone(),
                reason: format!("matched quick-select keyword '{}'", keyword),
                base_template: None,
                override_flag: false,
                priority: Priority::Medium,
                confidence: Some(Confidence::Medium),
            });
        }
    }
    None
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
