//! MCP Server implementation and lifecycle management.
//!
//! The server handler delegates tool calls to the Looking Glass tool router
//! and resource requests to the resource service.
//!
//! The ToolRouter is built in `domains/tools/router.rs`; adding a tool does
//! not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    looking_glass::LookingGlassService, resources::ResourceService, tools::build_tool_router,
};

const INSTRUCTIONS: &str = "Network latency query service for the backbone network. \
    Cities are identified by IATA metropolitan area codes (HKG, TYO, NYC, LON, ...); use \
    get_city_code to resolve a city name. Delays can be compared between the private line \
    backbone and the public internet.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,

    /// Query service shared by every tool route.
    looking_glass: Arc<LookingGlassService>,

    resource_service: Arc<ResourceService>,

    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let looking_glass = Arc::new(LookingGlassService::from_config(&config.backend));
        let resource_service = Arc::new(ResourceService::new(config.clone()));

        Self {
            tool_router: build_tool_router::<Self, _>(looking_glass.clone()),
            config,
            looking_glass,
            resource_service,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn looking_glass(&self) -> &Arc<LookingGlassService> {
        &self.looking_glass
    }

    /// Tools registered on the router.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .map_err(McpError::from)
    }
}
