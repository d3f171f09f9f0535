//! Notifications domain module.
//!
//! Controllers never return errors to the host; every failure (and every
//! completed deletion) becomes one [`Notification`] pushed to a [`Notifier`].
//!
//! ## Architecture
//!
//! - `model.rs` - Notification values and the [`Locale`] they are written in
//! - `messages.rs` - Localized titles and fallback messages
//! - `sink.rs` - [`Notifier`] implementations

mod messages;
mod model;
mod sink;

pub use messages::MessageCatalog;
pub(crate) use messages::capitalize;
pub use model::{Locale, Notification, NotificationKind, ParseLocaleError};
pub use sink::{ChannelNotifier, Notifier, ToastQueue};
