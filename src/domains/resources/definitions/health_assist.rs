//! Health assistants: volunteers who support patients directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A health assistant as served by `health-assists/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthAssist {
    pub id: ResourceId,
    pub presenter_national_code: Option<String>,
    pub presenter_first_name: Option<String>,
    pub presenter_last_name: Option<String>,
    pub letter_file: Option<String>,
    pub assist_type: String,
    /// The backend spells this field `assiteDescription`.
    #[serde(rename = "assiteDescription")]
    pub assist_description: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Resource for HealthAssist {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.user.full_name()
    }

    fn matches(&self, needle: &str) -> bool {
        self.user.matches(needle)
    }
}

pub struct HealthAssistResource;

impl ResourceDefinition for HealthAssistResource {
    type Record = HealthAssist;

    const NAME: &'static str = "health-assists";
    const ENDPOINT: &'static str = "health-assists/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("health assistant", "health assistants"),
            Locale::Fa => ResourceLabels::new("سلامت‌یار", "سلامت‌یاران"),
        }
    }
}
