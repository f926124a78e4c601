//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rendering the resource content failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<serde_json::Error> for ResourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
            ResourceError::Internal(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}
