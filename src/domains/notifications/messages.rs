//! Localized notification text.
//!
//! Failure messages name the resource, so they are built from its
//! [`ResourceLabels`] in the active [`Locale`].

use super::model::{Locale, Notification};
use crate::core::api::ApiError;
use crate::domains::resources::ResourceLabels;

/// Message templates for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn error_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Error",
            Locale::Fa => "خطا",
        }
    }

    pub fn success_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Success",
            Locale::Fa => "موفقیت",
        }
    }

    /// Shown for every transport failure.
    pub fn connectivity(&self) -> &'static str {
        match self.locale {
            Locale::En => "Could not reach the server",
            Locale::Fa => "خطا در ارتباط با سرور",
        }
    }

    pub fn list_failed(&self, labels: ResourceLabels) -> String {
        match self.locale {
            Locale::En => format!("Failed to load the {} list", labels.plural),
            Locale::Fa => format!("خطا در دریافت لیست {}", labels.plural),
        }
    }

    pub fn delete_succeeded(&self, labels: ResourceLabels) -> String {
        match self.locale {
            Locale::En => format!("{} deleted successfully.", capitalize(labels.singular)),
            Locale::Fa => format!("{} با موفقیت حذف شد.", labels.singular),
        }
    }

    pub fn delete_failed(&self, labels: ResourceLabels) -> String {
        match self.locale {
            Locale::En => format!("Failed to delete {}.", labels.singular),
            Locale::Fa => format!("خطا در حذف {}", labels.singular),
        }
    }

    pub fn load_failed(&self, labels: ResourceLabels) -> String {
        match self.locale {
            Locale::En => format!("Failed to load {} details", labels.singular),
            Locale::Fa => format!("خطا در دریافت اطلاعات {}", labels.singular),
        }
    }

    /// Turn an API failure into the danger notification shown for it.
    pub fn failure(&self, error: &ApiError, fallback: &str) -> Notification {
        Notification::danger(
            self.error_title(),
            error.user_message(fallback, self.connectivity()),
        )
    }
}

/// `text` with its first character in upper case.
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::TransportError;

    const DOCTOR: ResourceLabels = ResourceLabels::new("doctor", "doctors");
    const DOCTOR_FA: ResourceLabels = ResourceLabels::new("پزشک", "پزشکان");

    #[test]
    fn test_english_messages() {
        let messages = MessageCatalog::new(Locale::En);
        assert_eq!(messages.list_failed(DOCTOR), "Failed to load the doctors list");
        assert_eq!(messages.delete_succeeded(DOCTOR), "Doctor deleted successfully.");
        assert_eq!(messages.delete_failed(DOCTOR), "Failed to delete doctor.");
        assert_eq!(messages.load_failed(DOCTOR), "Failed to load doctor details");
    }

    #[test]
    fn test_persian_messages() {
        let messages = MessageCatalog::new(Locale::Fa);
        assert_eq!(messages.error_title(), "خطا");
        assert_eq!(messages.list_failed(DOCTOR_FA), "خطا در دریافت لیست پزشکان");
        assert_eq!(messages.delete_succeeded(DOCTOR_FA), "پزشک با موفقیت حذف شد.");
    }

    #[test]
    fn test_failure_uses_server_message() {
        let messages = MessageCatalog::new(Locale::En);
        let n = messages.failure(&ApiError::reported(Some("not found".into())), "fallback");
        assert_eq!(n.title, "Error");
        assert_eq!(n.message, "not found");
    }

    #[test]
    fn test_failure_transport_is_generic() {
        let messages = MessageCatalog::new(Locale::Fa);
        let error = ApiError::from(TransportError::Timeout);
        let n = messages.failure(&error, "fallback");
        assert_eq!(n.message, "خطا در ارتباط با سرور");
    }

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(capitalize("private company"), "Private company");
        assert_eq!(capitalize("پزشک"), "پزشک");
        assert_eq!(capitalize(""), "");
    }
}
