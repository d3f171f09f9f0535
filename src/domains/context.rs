//! Collaborators shared by every view controller.

use std::sync::Arc;
use tracing::warn;

use crate::core::api::ApiError;
use crate::domains::navigation::{Navigation, Navigator};
use crate::domains::notifications::{Locale, MessageCatalog, Notification, Notifier};

/// Where a view sends its notifications and navigations.
#[derive(Clone)]
pub struct ViewContext {
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub locale: Locale,
}

impl ViewContext {
    pub fn new(notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>, locale: Locale) -> Self {
        Self {
            notifier,
            navigator,
            locale,
        }
    }

    pub fn messages(&self) -> MessageCatalog {
        MessageCatalog::new(self.locale)
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.push(notification);
    }

    /// Log a failed call and show it to the user.
    pub fn notify_failure(&self, resource: &str, error: &ApiError, fallback: &str) {
        warn!(resource, error = %error, "{}", fallback);
        self.notify(self.messages().failure(error, fallback));
    }

    pub fn navigate(&self, navigation: Navigation) {
        self.navigator.navigate(navigation);
    }
}

impl std::fmt::Debug for ViewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewContext")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
