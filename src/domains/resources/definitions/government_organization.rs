//! Government organizations cooperating with the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// A government organization as served by `government-organizations/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GovernmentOrganization {
    pub id: ResourceId,
    pub name: String,
    pub parent_ministry_or_body: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub activity_area: String,
    pub official_website: String,
    pub main_phone_number: String,
    pub fax_number: Option<String>,
    pub official_email: Option<String>,
    pub state: String,
    pub city: String,
    pub county: String,
    pub central_address_detail: String,
    pub head_person_name: String,
    pub liaison_person_name: Option<String>,
    pub liaison_person_phone: Option<String>,
    pub liaison_person_email: Option<String>,
    pub collaboration_level: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for GovernmentOrganization {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

pub struct GovernmentOrganizationResource;

impl ResourceDefinition for GovernmentOrganizationResource {
    type Record = GovernmentOrganization;

    const NAME: &'static str = "government-organizations";
    const ENDPOINT: &'static str = "government-organizations/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("government organization", "government organizations"),
            Locale::Fa => ResourceLabels::new("سازمان دولتی", "سازمان‌های دولتی"),
        }
    }
}
