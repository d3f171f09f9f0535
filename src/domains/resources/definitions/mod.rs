//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - The record type as the API serves it
//! - Metadata (name, endpoint, searchability, labels)
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement [`Resource`] for the record and [`ResourceDefinition`] for the marker
//! 3. Export it here
//! 4. Register in `registry.rs`

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domains::notifications::Locale;

mod association;
mod benefactor;
mod charity_center;
mod consultation_request;
mod doctor;
mod dynamic;
mod government_organization;
mod health_assist;
mod medical_center;
mod patient;
mod patient_service_request;
mod private_company;
mod service_center;
mod user;

pub use association::{Association, AssociationResource};
pub use benefactor::{Benefactor, BenefactorResource};
pub use charity_center::{CharityCenter, CharityCenterResource};
pub use consultation_request::{ConsultationRequest, ConsultationRequestResource};
pub use doctor::{Doctor, DoctorResource};
pub use dynamic::DynamicRecord;
pub use government_organization::{GovernmentOrganization, GovernmentOrganizationResource};
pub use health_assist::{HealthAssist, HealthAssistResource};
pub use medical_center::{MedicalCenter, MedicalCenterResource};
pub use patient::{Patient, PatientResource};
pub use patient_service_request::{PatientServiceRequest, PatientServiceRequestResource};
pub use private_company::{PrivateCompany, PrivateCompanyResource};
pub use service_center::{ServiceCenter, ServiceCenterResource};
pub use user::UserProfile;

/// Identifier of a record on the backend.
pub type ResourceId = i64;

/// A record served by the API.
///
/// The shape is owned by the backend; the console only relies on the
/// identifier and a short label.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The record identifier.
    fn id(&self) -> ResourceId;

    /// A short label for rows and prompts.
    fn display_name(&self) -> String;

    /// Whether the record matches a search typed by the user.
    ///
    /// Used to filter a loaded page of collections the backend cannot
    /// search. `needle` is already lowercase and non-empty.
    fn matches(&self, needle: &str) -> bool {
        self.display_name().to_lowercase().contains(needle)
    }
}

/// Singular and plural names of a resource in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl ResourceLabels {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }
}

/// Trait for resource definitions.
///
/// Each resource must implement this trait to describe where it lives and
/// how it is named.
pub trait ResourceDefinition {
    /// Record type served by the endpoint.
    type Record: Resource;

    /// Unique name, also the first segment of the console routes.
    const NAME: &'static str;

    /// Endpoint path relative to the API prefix.
    const ENDPOINT: &'static str;

    /// Whether the list endpoint accepts a `search` parameter.
    const SEARCHABLE: bool;

    /// Names shown to users in the given language.
    fn labels(locale: Locale) -> ResourceLabels;
}

/// Serde helpers shared by the record types.
pub(crate) mod fields {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    /// Accept RFC 3339 timestamps with any offset, and tolerate blanks.
    pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .filter(|value| !value.trim().is_empty())
            .and_then(|value| DateTime::parse_from_rfc3339(&value).ok())
            .map(|value| value.with_timezone(&Utc)))
    }
}
