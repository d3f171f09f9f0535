//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use super::definitions::{
    AssociationResource, BenefactorResource, CharityCenterResource, ConsultationRequestResource,
    DoctorResource, GovernmentOrganizationResource, HealthAssistResource, MedicalCenterResource,
    PatientResource, PatientServiceRequestResource, PrivateCompanyResource, ResourceDefinition,
    ResourceLabels, ServiceCenterResource,
};
use crate::domains::notifications::Locale;

/// Type-erased metadata of a registered resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Unique name, also the route base.
    pub name: &'static str,

    /// Endpoint path relative to the API prefix.
    pub endpoint: &'static str,

    /// Whether the list endpoint accepts a search term.
    pub searchable: bool,

    labels_en: ResourceLabels,
    labels_fa: ResourceLabels,
}

impl ResourceDescriptor {
    /// Names of the resource in the given language.
    pub fn labels(&self, locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => self.labels_en,
            Locale::Fa => self.labels_fa,
        }
    }

    /// Base path of the console routes, e.g. `/doctors`.
    pub fn route_base(&self) -> String {
        format!("/{}", self.name)
    }
}

/// Helper function to create a descriptor from a definition.
fn build_descriptor<D: ResourceDefinition>() -> ResourceDescriptor {
    ResourceDescriptor {
        name: D::NAME,
        endpoint: D::ENDPOINT,
        searchable: D::SEARCHABLE,
        labels_en: D::labels(Locale::En),
        labels_fa: D::labels(Locale::Fa),
    }
}

/// Get all registered resources.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceDescriptor> {
    vec![
        build_descriptor::<AssociationResource>(),
        build_descriptor::<BenefactorResource>(),
        build_descriptor::<CharityCenterResource>(),
        build_descriptor::<ConsultationRequestResource>(),
        build_descriptor::<DoctorResource>(),
        build_descriptor::<GovernmentOrganizationResource>(),
        build_descriptor::<HealthAssistResource>(),
        build_descriptor::<MedicalCenterResource>(),
        build_descriptor::<PatientResource>(),
        build_descriptor::<PatientServiceRequestResource>(),
        build_descriptor::<PrivateCompanyResource>(),
        build_descriptor::<ServiceCenterResource>(),
    ]
}

/// Get the list of all resource names.
pub fn resource_names() -> Vec<&'static str> {
    get_all_resources().iter().map(|r| r.name).collect()
}
