//! Branch condition grammar.
//!
//! The decision tree supports exactly one expression form:
//! `<identifier> == '<literal>'` (single or double quoted literal).
//! Expressions are parsed once at configuration-load time; anything
//! outside the grammar loads as [`Condition::Unsupported`], which never
//! matches. Malformed conditions are fail-closed, not errors -- a bad
//! expression must never halt tree traversal.

use serde::{Deserialize, Serialize};

/// A parsed branch condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// `field == 'literal'` -- true iff the answer under `field` equals
    /// `literal` exactly.
    Eq { field: String, literal: String },
    /// An expression outside the supported grammar. Always false.
    Unsupported { raw: String },
}

impl Condition {
    /// Parse an expression string. Never fails: out-of-grammar input
    /// produces `Condition::Unsupported`.
    pub fn parse(expr: &str) -> Condition {
        match parse_eq(expr) {
            Some((field, literal)) => Condition::Eq { field, literal },
            None => Condition::Unsupported {
                raw: expr.to_string(),
            },
        }
    }
}

fn parse_eq(expr: &str) -> Option<(String, String)> {
    let (lhs, rhs) = expr.split_once("==")?;

    let field = lhs.trim();
    if field.is_empty() || !field.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }

    let rhs = rhs.trim();
    let quote = rhs.chars().next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let literal = rhs.strip_prefix(quote)?.strip_suffix(quote)?;
    if literal.is_empty() || literal.contains(quote) {
        return None;
    }

    Some((field.to_string(), literal.to_string()))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
