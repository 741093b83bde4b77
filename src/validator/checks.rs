//! The built-in static checks, in chain order.
//!
//! These are string heuristics, not a parser. The keyword scan in
//! particular matches substrings, so a mutation keyword inside a string
//! literal or identifier is still rejected; a stricter tokenizing check can
//! replace it without touching the chain.

use super::{Check, Rejection, RejectionKind};

/// Keywords that mutate data or schema, rejected anywhere in the text
const FORBIDDEN_KEYWORDS: [&str; 7] = [
    "DROP", "TRUNCATE", "ALTER", "CREATE", "DELETE", "INSERT", "UPDATE",
];

/// Adjacent-keyword-repeat patterns, each with its own reason
const DUPLICATE_CLAUSES: [(&str, &str); 5] = [
    ("FROM FROM", "Duplicate FROM clause"),
    ("WHERE WHERE", "Duplicate WHERE clause"),
    ("SELECT SELECT", "Duplicate SELECT keyword"),
    ("GROUP GROUP", "Duplicate GROUP BY clause"),
    ("ORDER ORDER", "Duplicate ORDER BY clause"),
];

/// Rejects empty or whitespace-only text
pub struct NonEmpty;

impl Check for NonEmpty {
    fn check(&self, sql: &str) -> Result<(), Rejection> {
        if sql.trim().is_empty() {
            return Err(Rejection::malformed("Query cannot be empty"));
        }
        Ok(())
    }
}

/// Requires the text to begin with SELECT, ignoring leading whitespace
pub struct SelectOnly;

impl Check for SelectOnly {
    fn check(&self, sql: &str) -> Result<(), Rejection> {
        if !sql.trim_start().to_uppercase().starts_with("SELECT") {
            return Err(Rejection::malformed("Only SELECT queries are allowed"));
        }
        Ok(())
    }
}

/// Rejects any text containing a data-definition or data-mutation keyword
pub struct NoForbiddenKeywords;

impl Check for NoForbiddenKeywords {
    fn check(&self, sql: &str) -> Result<(), Rejection> {
        let upper = sql.to_uppercase();
        if FORBIDDEN_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
            return Err(Rejection {
                kind: RejectionKind::Forbidden,
                reason: "This operation is not allowed",
            });
        }
        Ok(())
    }
}

/// Requires '(' and ')' counts to match
pub struct BalancedParentheses;

impl Check for BalancedParentheses {
    fn check(&self, sql: &str) -> Result<(), Rejection> {
        let open = sql.chars().filter(|c| *c == '(').count();
        let close = sql.chars().filter(|c| *c == ')').count();
        if open != close {
            return Err(Rejection::malformed("Unbalanced parentheses in query"));
        }
        Ok(())
    }
}

/// Lints for a keyword appearing twice in direct succession.
///
/// Duplicates separated by other tokens are not caught; this only exists to
/// turn the most common copy-paste slips into a readable reason.
pub struct NoDuplicateClauses;

impl Check for NoDuplicateClauses {
    fn check(&self, sql: &str) -> Result<(), Rejection> {
        let upper = sql.to_uppercase();
        for (pattern, reason) in DUPLICATE_CLAUSES {
            if upper.contains(pattern) {
                return Err(Rejection::malformed(reason));
            }
        }
        Ok(())
    }
}
