//! CLI-specific error types
//!
//! All CLI errors are fatal: they print to stderr and exit non-zero.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dataset store error
    #[error("Dataset store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Server startup or runtime error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),

    /// A query failed validation (check command)
    #[error("Rejected: {0}")]
    Rejected(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CliError::Config("missing file".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing file");

        let err = CliError::Rejected("Query cannot be empty");
        assert_eq!(err.to_string(), "Rejected: Query cannot be empty");
    }
}
