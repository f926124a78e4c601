//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised by the tool plumbing itself, as opposed to the query
/// failures a tool reports back to the caller as an error result.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The argument object did not match the tool's parameter schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A result could not be serialized for the client.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<ToolError> for McpError {
    fn from(e: ToolError) -> Self {
        match e {
            ToolError::InvalidArguments(_) => McpError::invalid_params(e.to_string(), None),
            ToolError::Serialization(_) => McpError::internal_error(e.to_string(), None),
        }
    }
}
