//! Private companies offering services or sponsorship.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, fields};
use crate::domains::notifications::Locale;

/// A private company as served by `private-companies/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrivateCompany {
    pub id: ResourceId,
    pub name: String,
    pub year_found: i32,
    pub license: bool,
    pub year_start: i32,
    pub year_license: Option<i32>,
    pub license_reference: String,
    pub activity: String,
    pub specialized_area: String,
    pub target_community: String,
    pub shareable_features: String,
    pub name_ceo: String,
    pub phone_number_ceo: String,
    #[serde(rename = "nameCeo2")]
    pub name_ceo2: Option<String>,
    #[serde(rename = "phoneNumberCeo2")]
    pub phone_number_ceo2: String,
    pub land_line_number: String,
    pub state: String,
    pub city: String,
    pub county: String,
    pub residential_address: String,
    pub workplace_address: String,
    pub scope_activity: String,
    pub name_representative: String,
    pub mobile_representative: String,
    pub membership_request: Option<String>,
    pub activity_license: Option<String>,
    pub collection_logo: Option<String>,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for PrivateCompany {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.name_ceo, &self.activity, &self.city]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Definition of the private companies collection.
pub struct PrivateCompanyResource;

impl ResourceDefinition for PrivateCompanyResource {
    type Record = PrivateCompany;

    const NAME: &'static str = "private-companies";
    const ENDPOINT: &'static str = "private-companies/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("private company", "private companies"),
            Locale::Fa => ResourceLabels::new("شرکت خصوصی", "شرکت‌های خصوصی"),
        }
    }
}
