//! Browser-specific error types.

use thiserror::Error;

/// Errors returned by browser operations that validate their input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// Page sizes are limited to the values the pager offers.
    #[error("Invalid page size: {0} (expected 10, 20 or 50)")]
    InvalidPageSize(u32),

    /// A page size that is not a number at all.
    #[error("Invalid page size: {0:?}")]
    UnparsablePageSize(String),
}
