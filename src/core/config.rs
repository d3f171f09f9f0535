//! Configuration management for the console.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

use super::error::{Error, Result};
use crate::domains::browser::PageSize;
use crate::domains::layouts::LayoutKind;
use crate::domains::notifications::Locale;

/// Main configuration structure for the console.
///
/// Sections are grouped by concern so each component only receives the
/// part it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application identity and routing.
    pub app: AppConfig,

    /// Remote API location and transport settings.
    pub api: ApiConfig,

    /// Resource browser behavior.
    pub browser: BrowserConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// API credentials.
    pub credentials: CredentialsConfig,
}

/// Application identity and routing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name reported in logs and the console header.
    pub name: String,

    /// Version of the console.
    pub version: String,

    /// Path prefix of every API endpoint.
    pub api_prefix: String,

    /// Route shown after sign-in.
    pub authenticated_entry_path: String,

    /// Route shown to anonymous users.
    pub unauthenticated_entry_path: String,

    /// Language of user-facing messages.
    pub locale: Locale,

    /// Page layout used by the console host.
    pub layout: LayoutKind,

    /// Resource the console opens on start.
    pub default_resource: String,
}

/// Remote API location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend (e.g. `http://127.0.0.1:8000`).
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Resource browser behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Quiet period before a search term is committed, in milliseconds.
    pub debounce_ms: u64,

    /// Page size a browser starts with.
    pub default_page_size: PageSize,

    /// Drop list responses that arrive after a newer request was issued.
    pub discard_stale_responses: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer token sent with every request, when present.
    pub access_token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "care-console".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            api_prefix: "/api".to_string(),
            authenticated_entry_path: "/home".to_string(),
            unauthenticated_entry_path: "/sign-in".to_string(),
            locale: Locale::default(),
            layout: LayoutKind::default(),
            default_resource: "associations".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            default_page_size: PageSize::default(),
            discard_stale_responses: true,
        }
    }
}

impl BrowserConfig {
    /// The debounce window as a [`Duration`].
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            api: ApiConfig::default(),
            browser: BrowserConfig::default(),
            logging: LoggingConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    /// Variables are prefixed with `CONSOLE_`, for example
    /// `CONSOLE_API_BASE_URL` or `CONSOLE_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default().with_env_overrides()
    }

    /// Load configuration from a specific `.env` file, then the environment.
    ///
    /// Variables already present in the process environment win over the file.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path)
            .map_err(|e| Error::config(format!("Failed to load {}: {}", path.display(), e)))?;
        Ok(Self::default().with_env_overrides())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(name) = std::env::var("CONSOLE_APP_NAME") {
            self.app.name = name;
        }

        if let Ok(prefix) = std::env::var("CONSOLE_API_PREFIX") {
            self.app.api_prefix = prefix;
        }

        if let Some(locale) = parse_env::<Locale>("CONSOLE_LOCALE") {
            self.app.locale = locale;
        }

        if let Some(layout) = parse_env::<LayoutKind>("CONSOLE_LAYOUT") {
            self.app.layout = layout;
        }

        if let Ok(resource) = std::env::var("CONSOLE_RESOURCE") {
            self.app.default_resource = resource;
        }

        if let Ok(base_url) = std::env::var("CONSOLE_API_BASE_URL") {
            self.api.base_url = base_url;
        } else {
            warn!(
                "CONSOLE_API_BASE_URL not set - using {}",
                self.api.base_url
            );
        }

        if let Some(timeout) = parse_env::<u64>("CONSOLE_API_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout;
        }

        if let Some(debounce) = parse_env::<u64>("CONSOLE_DEBOUNCE_MS") {
            self.browser.debounce_ms = debounce;
        }

        if let Some(page_size) = parse_env::<PageSize>("CONSOLE_PAGE_SIZE") {
            self.browser.default_page_size = page_size;
        }

        if let Some(discard) = parse_env::<bool>("CONSOLE_DISCARD_STALE") {
            self.browser.discard_stale_responses = discard;
            info!("Discard stale responses: {}", discard);
        }

        if let Ok(level) = std::env::var("CONSOLE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Ok(token) = std::env::var("CONSOLE_ACCESS_TOKEN") {
            self.credentials.access_token = Some(token);
            info!("API access token loaded from environment");
        }

        self
    }
}

/// Read and parse an environment variable, warning about unparsable values.
fn parse_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}
