//! Layout-specific error types.

use thiserror::Error;

/// Errors that can occur while choosing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout name is not one of the known kinds.
    #[error("Unknown layout: {0}")]
    UnknownKind(String),

    /// No renderer is registered at all.
    #[error("No layouts registered")]
    Empty,
}

impl LayoutError {
    /// Create a new "unknown kind" error.
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownKind(name.into())
    }
}
