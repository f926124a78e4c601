//! Looking Glass MCP server entry point.
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use looking_glass_mcp::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging comes up before the rest of the config so its warnings are visible.
    dotenvy::dotenv().ok();
    init_logging(&std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

    let config = Config::from_env();
    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        backend = %config.backend.base_url,
        timeout_secs = config.backend.timeout_secs,
        "Looking glass backend configured"
    );

    if config.transport.is_stdio() {
        info!("stdout carries the MCP protocol; logging to stderr only");
    }

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);

    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr: in STDIO mode stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
