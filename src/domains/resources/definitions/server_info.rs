//! Server info resource definition.

use serde::Serialize;

use super::ResourceDefinition;
use crate::core::config::Config;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "looking-glass://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server name and version, the Looking Glass backend in use, and the available tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

/// Snapshot rendered by [`ServerInfoResource`].
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub backend_url: String,
    pub backend_timeout_secs: u64,
    pub tools: Vec<&'static str>,
}

impl ServerInfo {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            backend_url: config.backend.base_url.clone(),
            backend_timeout_secs: config.backend.timeout_secs,
            tools: ToolRegistry::tool_names(),
        }
    }
}
