//! Layout registry.

use tracing::debug;

use super::error::LayoutError;
use super::kind::LayoutKind;
use super::renderers::{BlankLayout, OverlayLayout, SideLayout, TopBarLayout};

/// Frames a screen for display.
pub trait LayoutRenderer: Send + Sync {
    /// The kind this renderer is registered under.
    fn kind(&self) -> LayoutKind;

    /// Wrap `body` in the layout's chrome.
    fn render(&self, title: &str, body: &str) -> String;
}

/// Ordered map from [`LayoutKind`] to renderer.
#[derive(Default)]
pub struct LayoutRegistry {
    entries: Vec<Box<dyn LayoutRenderer>>,
}

impl LayoutRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with one renderer per [`LayoutKind`], in declaration order.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(SideLayout::collapsible());
        registry.register(SideLayout::stacked());
        registry.register(TopBarLayout);
        registry.register(SideLayout::frameless());
        registry.register(OverlayLayout);
        registry.register(BlankLayout);
        registry
    }

    /// Add a renderer, replacing any renderer of the same kind in place.
    pub fn register(&mut self, renderer: impl LayoutRenderer + 'static) {
        let kind = renderer.kind();
        let renderer: Box<dyn LayoutRenderer> = Box::new(renderer);
        match self.entries.iter_mut().find(|e| e.kind() == kind) {
            Some(slot) => *slot = renderer,
            None => self.entries.push(renderer),
        }
    }

    pub fn kinds(&self) -> Vec<LayoutKind> {
        self.entries.iter().map(|e| e.kind()).collect()
    }

    /// The renderer for `kind`, or the first registered one.
    pub fn resolve(&self, kind: LayoutKind) -> Result<&dyn LayoutRenderer, LayoutError> {
        if let Some(entry) = self.entries.iter().find(|e| e.kind() == kind) {
            return Ok(entry.as_ref());
        }

        let fallback = self.entries.first().ok_or(LayoutError::Empty)?;
        debug!("Layout {} not registered, using {}", kind, fallback.kind());
        Ok(fallback.as_ref())
    }
}
