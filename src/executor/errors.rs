//! Executor error types
//!
//! A learner query that fails at execution is classified by a
//! case-insensitive substring scan of the backend's message, so callers can
//! show a friendly reason while the verbatim engine message stays available.

use thiserror::Error;

/// Result type for executor operations
pub type ExecResult<T> = Result<T, ExecError>;

/// Classified execution failure. Each variant keeps the backend's message
/// verbatim; `Display` gives the learner-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    /// Query referenced a column that does not exist
    #[error("Invalid column name in query")]
    InvalidColumn { message: String },

    /// Query referenced a table that does not exist
    #[error("Invalid table name in query")]
    InvalidTable { message: String },

    /// Query did not parse
    #[error("SQL syntax error")]
    Syntax { message: String },

    /// Any other execution failure, surfaced verbatim
    #[error("{message}")]
    Execution { message: String },
}

impl ExecError {
    /// Classify a backend error message
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();

        if lowered.contains("no such column") {
            ExecError::InvalidColumn { message }
        } else if lowered.contains("no such table") {
            ExecError::InvalidTable { message }
        } else if lowered.contains("syntax error") {
            ExecError::Syntax { message }
        } else {
            ExecError::Execution { message }
        }
    }

    /// Returns the verbatim backend message
    pub fn backend_message(&self) -> &str {
        match self {
            ExecError::InvalidColumn { message }
            | ExecError::InvalidTable { message }
            | ExecError::Syntax { message }
            | ExecError::Execution { message } => message,
        }
    }
}

impl From<rusqlite::Error> for ExecError {
    fn from(err: rusqlite::Error) -> Self {
        ExecError::classify(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_substring() {
        assert!(matches!(
            ExecError::classify("no such column: shift_name"),
            ExecError::InvalidColumn { .. }
        ));
        assert!(matches!(
            ExecError::classify("no such table: camp_log"),
            ExecError::InvalidTable { .. }
        ));
        assert!(matches!(
            ExecError::classify("near \"FORM\": syntax error"),
            ExecError::Syntax { .. }
        ));
        assert!(matches!(
            ExecError::classify("interrupted"),
            ExecError::Execution { .. }
        ));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert!(matches!(
            ExecError::classify("NO SUCH TABLE: finances"),
            ExecError::InvalidTable { .. }
        ));
    }

    #[test]
    fn test_backend_message_preserved_verbatim() {
        let err = ExecError::classify("no such column: shft");
        assert_eq!(err.backend_message(), "no such column: shft");
        assert_eq!(err.to_string(), "Invalid column name in query");
    }

    #[test]
    fn test_execution_error_displays_raw_message() {
        let err = ExecError::classify("database is locked");
        assert_eq!(err.to_string(), "database is locked");
    }
}
