//! casefile - an educational SQL sandbox
//!
//! Learners submit read-only queries against a small set of narrative
//! datasets; the server validates, executes, and judges them against a
//! hidden reference query per case.

pub mod cases;
pub mod cli;
pub mod compare;
pub mod datasets;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod pipeline;
pub mod validator;
