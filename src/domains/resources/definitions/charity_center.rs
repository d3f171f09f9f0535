//! Charity centers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// A charity center as served by `charity-centers/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharityCenter {
    pub id: ResourceId,
    pub name: String,
    pub main_activity_area: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub registration_number: Option<String>,
    pub establishment_date: Option<String>,
    pub mission_and_goals: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub state: String,
    pub city: String,
    pub county: String,
    pub address_detail: String,
    pub website: Option<String>,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub current_needs: Option<String>,
    pub donation_methods: Option<String>,
    pub charter_or_license_file: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for CharityCenter {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Definition of the charity centers collection.
pub struct CharityCenterResource;

impl ResourceDefinition for CharityCenterResource {
    type Record = CharityCenter;

    const NAME: &'static str = "charity-centers";
    const ENDPOINT: &'static str = "charity-centers/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("charity center", "charity centers"),
            Locale::Fa => ResourceLabels::new("مرکز خیریه", "مراکز خیریه"),
        }
    }
}
