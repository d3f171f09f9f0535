//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the console,
//! including error handling, configuration, the data-access layer and the
//! stdio console host.

pub mod api;
pub mod config;
#[cfg(feature = "http")]
pub mod console;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
