//! CLI argument definitions using clap
//!
//! Commands:
//! - casefile seed --config <path>
//! - casefile serve --config <path>
//! - casefile check <query>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Casefile - an educational SQL sandbox server
#[derive(Parser, Debug)]
#[command(name = "casefile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create and seed the dataset store
    Seed {
        /// Path to configuration file
        #[arg(long, default_value = "./casefile.json")]
        config: PathBuf,
    },

    /// Start the sandbox server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./casefile.json")]
        config: PathBuf,
    },

    /// Run the statement validator over a query and exit
    Check {
        /// The query text to validate
        query: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
