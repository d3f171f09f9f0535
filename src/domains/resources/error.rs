//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur while looking up resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No resource is registered under this name.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// A record identifier could not be parsed.
    #[error("Invalid record id: {0}")]
    InvalidId(String),
}

impl ResourceError {
    /// Create a new "unknown resource" error.
    pub fn unknown_resource(name: impl Into<String>) -> Self {
        Self::UnknownResource(name.into())
    }

    /// Create a new "invalid id" error.
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId(raw.into())
    }
}
