//! Looking Glass MCP server.
//!
//! Exposes network diagnostics from a Looking Glass service (city-to-city
//! latency, eyeball coverage, acceleration tests, router diagnostics and
//! city code lookup) as MCP tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **looking_glass**: query validation, backend client, response
//!     normalization and error classification
//!   - **tools**: one MCP tool per query kind
//!   - **resources**: read-only server and reference documents
//!
//! # Example
//!
//! ```rust,no_run
//! use looking_glass_mcp::domains::looking_glass::{LookingGlassService, QueryRequest};
//! use looking_glass_mcp::Config;
//!
//! let config = Config::from_env();
//! let service = LookingGlassService::from_config(&config.backend);
//! let result = service.handle(&QueryRequest::CityDelay {
//!     from_city: "hkg".into(),
//!     to_city: "NYC".into(),
//!     network_type: Some("private_line".into()),
//! });
//! println!("{result:?}");
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
