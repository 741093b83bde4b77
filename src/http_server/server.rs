//! # HTTP Server
//!
//! Binds the game routes and the health check into one axum router with
//! CORS, and owns the listening loop. Shared state is the read-only
//! dataset store and case registry behind the pipeline; per-request state
//! is nothing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::config::ServerConfig;
use super::game_routes::{game_routes, GameState};
use crate::cases::CaseRegistry;
use crate::executor::DatasetStore;
use crate::observability::Logger;
use crate::pipeline::{CasePipeline, LoggingProgressTracker, ProgressTracker};

/// HTTP server for the casefile sandbox
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with the default progress tracker
    pub fn new(config: ServerConfig) -> Self {
        Self::with_progress(config, Arc::new(LoggingProgressTracker))
    }

    /// Create a server with a custom progress collaborator
    pub fn with_progress(config: ServerConfig, progress: Arc<dyn ProgressTracker>) -> Self {
        let store = DatasetStore::open(&config.db_path, config.statement_timeout());
        let pipeline = CasePipeline::new(store, CaseRegistry::builtin(), progress);
        let router = Self::build_router(&config, pipeline);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &ServerConfig, pipeline: CasePipeline) -> Router {
        let state = Arc::new(GameState::new(pipeline));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .merge(game_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start serving (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let addr_str = addr.to_string();
        Logger::info(
            "SERVER_STARTED",
            &[("addr", addr_str.as_str()), ("db_path", self.config.db_path.as_str())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_uses_configured_addr() {
        let server = HttpServer::new(ServerConfig::with_port(8080));
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds() {
        let server = HttpServer::new(ServerConfig::default());
        let _router = server.router();
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
