//! CLI module for casefile
//!
//! Provides the command-line interface:
//! - seed: create and fill the dataset store
//! - serve: boot the sandbox HTTP server
//! - check: one-shot statement validation

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
