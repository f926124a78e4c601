//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC; every accepted connection gets its own MCP
//! session backed by a clone of the server (the query service is shared).

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed accept before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!(%peer, "Failed to set TCP_NODELAY: {}", e);
                    }
                    tokio::spawn(serve_connection(server.clone(), stream, peer));
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                }
            }
        }
    }
}

async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!(%peer, "Accepted connection");

    let service = match server.serve(stream).await {
        Ok(service) => service,
        Err(e) => {
            warn!(%peer, "Failed to initialize MCP session: {}", e);
            return;
        }
    };

    match service.waiting().await {
        Ok(reason) => info!(%peer, "Client disconnected: {:?}", reason),
        Err(e) => warn!(%peer, "Session ended with error: {}", e),
    }
}
