//! # Observability
//!
//! Structured logging for the casefile server.

pub mod logger;

pub use logger::{Logger, Severity};
