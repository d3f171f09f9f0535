//! Care Console Library
//!
//! This crate provides the data-loading lifecycle shared by every resource
//! screen of the care coordination console: paginated lists with debounced
//! search and delete confirmation, single-record detail loading, navigation
//! intents and error-to-notification mapping, on top of a REST API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the data-access layer and the stdio console
//! - **domains**: View logic organized by bounded contexts
//!   - **resources**: Domain entities served by the API
//!   - **browser**: List views
//!   - **details**: Detail views
//!   - **notifications**, **navigation**, **layouts**: What views hand to the host
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use care_console::core::api::HttpDataSource;
//! use care_console::domains::browser::ResourceBrowser;
//! use care_console::domains::navigation::NavigationLog;
//! use care_console::domains::notifications::ToastQueue;
//! use care_console::domains::resources::{definitions::Doctor, find_resource};
//! use care_console::{Config, ViewContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let doctors = find_resource("doctors")?;
//!     let source = HttpDataSource::<Doctor>::new(&config, &doctors)?;
//!
//!     let toasts = Arc::new(ToastQueue::new());
//!     let navigator = Arc::new(NavigationLog::new());
//!     let context = ViewContext::new(toasts.clone(), navigator, config.app.locale);
//!     let browser = ResourceBrowser::new(source, doctors, &config.browser, context);
//!
//!     browser.mount();
//!     browser.settle().await;
//!     println!("{} doctors", browser.snapshot().total_items);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
pub use domains::ViewContext;
