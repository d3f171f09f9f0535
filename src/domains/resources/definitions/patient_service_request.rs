//! Service requests filed on behalf of patients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A patient service request as served by `patient-service-requests/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientServiceRequest {
    pub id: ResourceId,
    pub using_residence: bool,
    pub number_of_woman: u32,
    pub number_of_man: u32,
    pub explain: String,
    pub needed_service: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Resource for PatientServiceRequest {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{}: {}", self.user.full_name(), self.needed_service)
    }

    fn matches(&self, needle: &str) -> bool {
        self.user.matches(needle)
    }
}

pub struct PatientServiceRequestResource;

impl ResourceDefinition for PatientServiceRequestResource {
    type Record = PatientServiceRequest;

    const NAME: &'static str = "patient-service-requests";
    const ENDPOINT: &'static str = "patient-service-requests/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("patient service request", "patient service requests"),
            Locale::Fa => ResourceLabels::new("درخواست خدمت بیمار", "درخواست‌های خدمت بیماران"),
        }
    }
}
