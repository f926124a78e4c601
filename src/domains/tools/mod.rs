//! Tools domain module.
//!
//! Tools are what MCP clients call to run Looking Glass queries.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Builds the rmcp ToolRouter over a shared query service
//! - `registry.rs` - Tool metadata for listing
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a query kind to `looking_glass::QueryRequest`
//! 2. Create a file in `definitions/lg/` implementing `LookingGlassTool`
//! 3. Export it in `definitions/lg/mod.rs`
//! 4. Add the route in `router.rs` and the entry in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
