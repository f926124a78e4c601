//! Resources domain module.
//!
//! Read-only documents MCP clients can fetch alongside the tools: a live
//! description of the server and a reference sheet for city codes.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
