//! The account embedded in person-like records.

use serde::{Deserialize, Serialize};

/// Account details of a registered person.
///
/// Embedded as `user` in patients, benefactors, doctors, health assistants
/// and requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<i64>,
    pub username: String,
    #[serde(rename = "first_name")]
    pub first_name: String,
    #[serde(rename = "last_name")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phone_number")]
    pub phone_number: String,
    #[serde(rename = "national_code")]
    pub national_code: String,
    pub gender: String,
    pub state: String,
    pub city: String,
    pub county: String,
    pub home_address: String,
    pub education: String,
    pub user_type: String,
}

impl UserProfile {
    /// First and last name joined, or the username when both are blank.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.username.clone()
        } else {
            name.to_string()
        }
    }

    /// Whether the full name or national code contains `needle`.
    ///
    /// `needle` is already lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
            || self.national_code.to_lowercase().contains(needle)
    }
}
