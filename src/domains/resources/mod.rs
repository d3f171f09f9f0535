//! Resources domain module.
//!
//! Resources are the domain entities managed by the console: each one is a
//! remote collection with list, detail and form views.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `Resource` and `ResourceDefinition` traits
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify the browser or the routes!**

pub mod definitions;
mod error;
mod registry;

pub use definitions::{Resource, ResourceDefinition, ResourceId, ResourceLabels};
pub use error::ResourceError;
pub use registry::{ResourceDescriptor, get_all_resources, resource_names};

/// Look up a registered resource by name.
pub fn find_resource(name: &str) -> Result<ResourceDescriptor, ResourceError> {
    get_all_resources()
        .into_iter()
        .find(|r| r.name == name)
        .ok_or_else(|| ResourceError::unknown_resource(name))
}

/// Parse a record identifier typed by a user or taken from a path.
pub fn parse_id(raw: &str) -> Result<ResourceId, ResourceError> {
    raw.trim()
        .parse()
        .map_err(|_| ResourceError::invalid_id(raw))
}
