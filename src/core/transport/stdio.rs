//! STDIO transport implementation.
//!
//! One MCP session over stdin/stdout. Logs must stay on stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            backend = %server.config().backend.base_url,
            "Ready - communicating via stdin/stdout"
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
