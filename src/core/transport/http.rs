//! HTTP transport implementation.
//!
//! Serves MCP streamable HTTP at the configured path with an axum router,
//! plus a `GET /health` probe. Every MCP session is handled by a clone of the
//! same server, so all sessions share one query service.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::{Config, McpServer};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum application: MCP endpoint, health probe, layers.
    pub fn router(&self, server: McpServer) -> Router {
        let config = server.config().clone();
        let mcp = StreamableHttpService::new(
            move || Ok(server.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        );

        let mut app = Router::new()
            .route("/health", get(health))
            .with_state(config)
            .nest_service(&self.config.path, mcp)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }
        app
    }

    /// Serve until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (MCP streamable HTTP, CORS {})",
            addr,
            if self.config.enable_cors {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!("  → MCP:    {}", self.config.path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// Health check endpoint.
async fn health(State(config): State<Arc<Config>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "name": config.server.name,
        "version": config.server.version,
        "backend": config.backend.base_url,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
