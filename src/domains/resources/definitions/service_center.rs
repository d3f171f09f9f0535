//! Service centers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// A service center as served by `service-centers/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceCenter {
    pub id: ResourceId,
    pub name: String,
    pub service_category: String,
    pub detailed_services: String,
    pub email: Option<String>,
    pub phone_number: String,
    pub state: String,
    pub city: String,
    pub county: String,
    pub address_detail: String,
    pub website: Option<String>,
    pub working_hours: Option<String>,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub license_number: Option<String>,
    pub license_file: Option<String>,
    pub service_area: Option<String>,
    pub description: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for ServiceCenter {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Definition of the service centers collection.
pub struct ServiceCenterResource;

impl ResourceDefinition for ServiceCenterResource {
    type Record = ServiceCenter;

    const NAME: &'static str = "service-centers";
    const ENDPOINT: &'static str = "service-centers/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("service center", "service centers"),
            Locale::Fa => ResourceLabels::new("مرکز خدمات", "مراکز خدمات"),
        }
    }
}
