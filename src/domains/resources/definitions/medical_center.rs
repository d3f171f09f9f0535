//! Medical centers: hospitals, clinics and similar facilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// A medical center as served by `medical-centers/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalCenter {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
    pub phone_number: String,
    pub state: String,
    pub city: String,
    pub county: String,
    pub address_detail: String,
    pub website: Option<String>,
    pub services: String,
    pub working_hours: Option<String>,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub license_number: Option<String>,
    pub license_file: Option<String>,
    pub description: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for MedicalCenter {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

/// Definition of the medical centers collection.
pub struct MedicalCenterResource;

impl ResourceDefinition for MedicalCenterResource {
    type Record = MedicalCenter;

    const NAME: &'static str = "medical-centers";
    const ENDPOINT: &'static str = "medical-centers/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("medical center", "medical centers"),
            Locale::Fa => ResourceLabels::new("مرکز درمانی", "مراکز درمانی"),
        }
    }
}
