//! CLI command implementations
//!
//! `seed` builds the dataset store; `serve` boots the HTTP server on a
//! tokio runtime; `check` runs the validator chain over a single query so
//! checks can be exercised without a running server.

use std::fs;
use std::path::Path;

use crate::datasets::seed;
use crate::http_server::{HttpServer, ServerConfig};
use crate::observability::Logger;
use crate::validator::StatementValidator;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Load configuration, falling back to defaults when the file is absent
fn load_config(path: &Path) -> CliResult<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("invalid config JSON: {}", e)))
}

/// Dispatch a parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Seed { config } => seed_store(&config),
        Command::Serve { config } => serve(&config),
        Command::Check { query } => check(&query),
    }
}

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

fn seed_store(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    seed::seed_file(Path::new(&config.db_path))?;
    Logger::info("STORE_SEEDED", &[("db_path", config.db_path.as_str())]);
    Ok(())
}

fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;

    // First start on a fresh deployment: seed rather than fail.
    if !Path::new(&config.db_path).exists() {
        seed::seed_file(Path::new(&config.db_path))?;
        Logger::info("STORE_SEEDED", &[("db_path", config.db_path.as_str())]);
    }

    let server = HttpServer::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;
    Ok(())
}

fn check(query: &str) -> CliResult<()> {
    let validator = StatementValidator::new();
    match validator.validate(query) {
        Ok(()) => {
            println!("accepted");
            Ok(())
        }
        Err(rejection) => Err(CliError::Rejected(rejection.reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let config = load_config(Path::new("/nonexistent/casefile.json")).unwrap();
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("casefile.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_config(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_config_file_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("casefile.json");
        fs::write(&path, r#"{"port": 9000, "db_path": "/tmp/x.db"}"#).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.db_path, "/tmp/x.db");
    }

    #[test]
    fn test_check_command() {
        assert!(check("SELECT 1").is_ok());
        assert!(matches!(
            check("DROP TABLE camp_logs"),
            Err(CliError::Rejected(_))
        ));
    }

    #[test]
    fn test_seed_command_creates_store() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("store.db");
        let config_path = dir.path().join("casefile.json");
        fs::write(
            &config_path,
            format!(r#"{{"db_path": "{}"}}"#, db_path.display()),
        )
        .unwrap();

        seed_store(&config_path).unwrap();
        assert!(db_path.exists());
    }
}
