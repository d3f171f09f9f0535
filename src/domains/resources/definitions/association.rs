//! Associations: civil groups registered with the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// An association as served by `associations/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Association {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub main_activity_area: String,
    pub mission_and_vision: String,
    pub establishment_date: Option<String>,
    pub registration_number: Option<String>,
    pub contact_phone_number: String,
    pub email: Option<String>,
    pub website_or_social_page: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub address_detail: Option<String>,
    pub head_person_name: String,
    pub head_person_phone: String,
    pub estimated_members_count: Option<u32>,
    pub membership_process: Option<String>,
    pub current_needs: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Association {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Definition of the associations collection.
pub struct AssociationResource;

impl ResourceDefinition for AssociationResource {
    type Record = Association;

    const NAME: &'static str = "associations";
    const ENDPOINT: &'static str = "associations/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("association", "associations"),
            Locale::Fa => ResourceLabels::new("انجمن", "انجمن‌ها"),
        }
    }
}
