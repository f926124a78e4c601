//! Domain modules.
//!
//! - `looking_glass`: the query layer (validation, backend, normalization, errors)
//! - `tools`: MCP tools over the query layer
//! - `resources`: read-only MCP resources

pub mod looking_glass;
pub mod resources;
pub mod tools;
