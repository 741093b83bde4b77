//! # Statement Validator
//!
//! Static inspection of learner-submitted query text before any execution.
//!
//! The validator is an ordered chain of [`Check`]s that short-circuits on
//! the first failure. Every check is a predicate over the raw text; a
//! rejection carries a fixed reason string that is surfaced verbatim to the
//! caller. Individual checks can be swapped for stricter ones (e.g. a
//! tokenizing keyword scan) without touching the chain.

pub mod checks;

use checks::{
    BalancedParentheses, NoDuplicateClauses, NoForbiddenKeywords, NonEmpty, SelectOnly,
};

/// How a rejection should be treated by the boundary layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// Malformed input the learner can correct
    Malformed,
    /// A disallowed operation (mutation or DDL keyword)
    Forbidden,
}

/// A failed check with its learner-facing reason
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub reason: &'static str,
}

impl Rejection {
    /// A malformed-input rejection
    pub fn malformed(reason: &'static str) -> Self {
        Self {
            kind: RejectionKind::Malformed,
            reason,
        }
    }
}

/// A single static check over raw query text
pub trait Check: Send + Sync {
    /// Accept the text or reject it with a fixed reason
    fn check(&self, sql: &str) -> Result<(), Rejection>;
}

/// Ordered, short-circuiting chain of checks
pub struct StatementValidator {
    checks: Vec<Box<dyn Check>>,
}

impl StatementValidator {
    /// The standard chain: non-empty, SELECT-only, keyword scan,
    /// parenthesis balance, duplicate-clause lint.
    pub fn new() -> Self {
        Self::with_checks(vec![
            Box::new(NonEmpty),
            Box::new(SelectOnly),
            Box::new(NoForbiddenKeywords),
            Box::new(BalancedParentheses),
            Box::new(NoDuplicateClauses),
        ])
    }

    /// Build a validator from an explicit chain
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Run the chain, stopping at the first failing check
    pub fn validate(&self, sql: &str) -> Result<(), Rejection> {
        for check in &self.checks {
            check.check(sql)?;
        }
        Ok(())
    }
}

impl Default for StatementValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_chain_accepts_plain_select() {
        let validator = StatementValidator::new();
        assert!(validator
            .validate("SELECT * FROM camp_logs WHERE shift = 'night'")
            .is_ok());
    }

    #[test]
    fn test_chain_order_empty_before_select() {
        // An empty string also fails the SELECT check; the chain must
        // report the emptiness reason because it runs first.
        let validator = StatementValidator::new();
        let err = validator.validate("").unwrap_err();
        assert_eq!(err.reason, "Query cannot be empty");
    }

    #[test]
    fn test_mutation_keyword_rejected_despite_select_prefix() {
        let validator = StatementValidator::new();
        let err = validator
            .validate("SELECT * FROM camp_logs; DELETE FROM camp_logs")
            .unwrap_err();
        assert_eq!(err.kind, RejectionKind::Forbidden);
        assert_eq!(err.reason, "This operation is not allowed");
    }

    #[test]
    fn test_non_select_rejected() {
        let validator = StatementValidator::new();
        let err = validator.validate("EXPLAIN SELECT 1").unwrap_err();
        assert_eq!(err.reason, "Only SELECT queries are allowed");
    }

    #[test]
    fn test_custom_chain_is_honored() {
        struct MaxLength(usize);
        impl Check for MaxLength {
            fn check(&self, sql: &str) -> Result<(), Rejection> {
                if sql.len() > self.0 {
                    return Err(Rejection::malformed("Query too long"));
                }
                Ok(())
            }
        }

        let validator = StatementValidator::with_checks(vec![Box::new(MaxLength(10))]);
        assert!(validator.validate("SELECT 1").is_ok());
        assert_eq!(
            validator.validate("SELECT 1, 2, 3").unwrap_err().reason,
            "Query too long"
        );
    }
}
