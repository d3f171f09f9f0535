//! Browser domain module.
//!
//! A [`ResourceBrowser`] drives the list view of one resource: paging,
//! debounced search, delete confirmation and navigation intents. Failures
//! never escape it; they become notifications.
//!
//! ## Architecture
//!
//! - `query.rs` - Page, page size and search terms
//! - `state.rs` - Everything the browser owns, and the host-facing snapshot
//! - `debounce.rs` - The cancellable search timer
//! - `controller.rs` - Operations, fetch scheduling and stale-response handling

mod controller;
mod debounce;
mod error;
mod query;
mod state;

pub use controller::ResourceBrowser;
pub use debounce::Debouncer;
pub use error::BrowserError;
pub use query::{PageSize, Query};
pub use state::{BrowserSnapshot, PendingDeletion};
