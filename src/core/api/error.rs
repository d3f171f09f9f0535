//! API error types.

use thiserror::Error;

/// Result type for envelope-level operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised when a request never produced a usable envelope.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    /// The connection could not be established or was interrupted.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status and no envelope.
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl TransportError {
    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Create an invalid URL error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// The two ways an API call can fail.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The call completed but the envelope reports `ok: false`.
    #[error("Request failed: {}", message.as_deref().unwrap_or("no message from server"))]
    Reported { message: Option<String> },

    /// The call itself failed; no server message is available.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ApiError {
    /// Create a reported failure carrying the server's message, if any.
    pub fn reported(message: Option<String>) -> Self {
        Self::Reported { message }
    }

    /// Whether this failure happened below the envelope.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Text to show the user for this failure.
    ///
    /// A reported failure shows the server message, or `fallback` when the
    /// server sent none (or an empty one). A transport failure always shows
    /// `connectivity`.
    pub fn user_message(&self, fallback: &str, connectivity: &str) -> String {
        match self {
            Self::Reported {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            Self::Reported { .. } => fallback.to_string(),
            Self::Transport(_) => connectivity.to_string(),
        }
    }
}
