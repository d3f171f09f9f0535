//! Navigation intents and their sinks.

use serde::Serialize;
use std::sync::{Mutex, PoisonError};

use crate::domains::resources::ResourceId;

/// A page of one resource the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", content = "id", rename_all = "lowercase")]
pub enum NavigationIntent {
    List,
    Create,
    View(ResourceId),
    Edit(ResourceId),
}

impl NavigationIntent {
    /// Console path of this intent below `route_base` (e.g. `/doctors`).
    pub fn path(&self, route_base: &str) -> String {
        match self {
            Self::List => route_base.to_string(),
            Self::Create => format!("{route_base}/create"),
            Self::View(id) => format!("{route_base}/view/{id}"),
            Self::Edit(id) => format!("{route_base}/edit/{id}"),
        }
    }
}

/// An intent bound to the resource it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub resource: &'static str,
    pub intent: NavigationIntent,
}

impl Navigation {
    pub fn new(resource: &'static str, intent: NavigationIntent) -> Self {
        Self { resource, intent }
    }

    /// Full console path, e.g. `/doctors/edit/7`.
    pub fn path(&self) -> String {
        self.intent.path(&format!("/{}", self.resource))
    }
}

/// Performs navigation requested by a controller.
pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: Navigation);
}

/// Records every navigation; hosts read the latest one.
#[derive(Debug, Default)]
pub struct NavigationLog {
    entries: Mutex<Vec<Navigation>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Navigation> {
        self.lock().last().cloned()
    }

    pub fn take(&self) -> Vec<Navigation> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Navigation>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, navigation: Navigation) {
        tracing::debug!("Navigate to {}", navigation.path());
        self.lock().push(navigation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_paths() {
        assert_eq!(NavigationIntent::List.path("/doctors"), "/doctors");
        assert_eq!(NavigationIntent::Create.path("/doctors"), "/doctors/create");
        assert_eq!(NavigationIntent::View(4).path("/doctors"), "/doctors/view/4");
        assert_eq!(NavigationIntent::Edit(4).path("/doctors"), "/doctors/edit/4");
    }

    #[test]
    fn test_navigation_log() {
        let log = NavigationLog::new();
        log.navigate(Navigation::new("patients", NavigationIntent::View(3)));
        log.navigate(Navigation::new("patients", NavigationIntent::List));

        assert_eq!(log.last().unwrap().path(), "/patients");
        assert_eq!(log.take().len(), 2);
        assert!(log.last().is_none());
    }
}
