//! Layouts domain module.
//!
//! The console frames every screen with a layout chosen by configuration.
//! A [`LayoutKind`] is resolved through the [`LayoutRegistry`]; kinds without
//! a registered renderer fall back to the first registered entry.
//!
//! ## Adding a New Layout
//!
//! 1. Add a variant to [`LayoutKind`] (declaration order is the fallback order)
//! 2. Implement [`LayoutRenderer`] in `renderers.rs`
//! 3. Register it in [`LayoutRegistry::with_builtin`]

mod error;
mod kind;
mod registry;
mod renderers;

pub use error::LayoutError;
pub use kind::LayoutKind;
pub use registry::{LayoutRegistry, LayoutRenderer};
pub use renderers::{BlankLayout, OverlayLayout, SideLayout, TopBarLayout};
