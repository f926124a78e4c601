//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. Resources are
//! defined in `definitions/` and registered via `registry.rs`.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::definitions::ServerInfo;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;

/// Service for listing and reading resources.
pub struct ResourceService {
    config: Arc<Config>,

    /// Key: resource URI.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content rendered at read time.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Live server and backend description.
    ServerInfo,
}

impl ResourceService {
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match &entry.content {
            ResourceContent::Text(text) => text.clone(),
            ResourceContent::Dynamic(DynamicResourceType::ServerInfo) => {
                serde_json::to_string_pretty(&ServerInfo::from_config(&self.config))?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
