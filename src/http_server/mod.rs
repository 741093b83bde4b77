//! # Casefile HTTP Server Module
//!
//! Boundary plumbing around the evaluation pipeline.
//!
//! # Endpoints
//!
//! - `POST /execute-sql` - evaluate a learner query, optionally against a case
//! - `GET /cases` - list the available cases
//! - `GET /case/:id/data` - dump the datasets a case exposes
//! - `GET /case/:id/schema` - schema description of those datasets
//! - `GET /health` - liveness probe

pub mod config;
pub mod game_routes;
pub mod server;

pub use config::ServerConfig;
pub use server::HttpServer;
