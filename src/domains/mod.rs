//! Domains module containing the console's view logic organized by bounded
//! contexts.
//!
//! Each subdomain represents a specific area of functionality, following
//! Domain-Driven Design principles for better organization and scalability.
//!
//! - **resources**: the entity catalogue and its registry
//! - **browser**: paginated, searchable list views
//! - **details**: single-record views
//! - **notifications**: user-facing messages
//! - **navigation**: intents and the route table
//! - **layouts**: screen frames

pub mod browser;
pub mod context;
pub mod details;
pub mod layouts;
pub mod navigation;
pub mod notifications;
pub mod resources;

pub use context::ViewContext;
