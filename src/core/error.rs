//! Error types and handling for the console.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies. View controllers never return it:
//! they turn failures into notifications. It surfaces where the crate is
//! wired together (configuration, data source construction, the console).

use thiserror::Error;

use super::api::{ApiError, TransportError};

/// A specialized Result type for console operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the console.
#[derive(Debug, Error)]
pub enum Error {
    /// Error returned by the remote API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the browser domain.
    #[error("Browser error: {0}")]
    Browser(#[from] crate::domains::browser::BrowserError),

    /// Error originating from the layouts domain.
    #[error("Layout error: {0}")]
    Layout(#[from] crate::domains::layouts::LayoutError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from the console streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Self::Api(ApiError::Transport(err))
    }
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
