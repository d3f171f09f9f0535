//! Consultation requests filed by registered users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A consultation request as served by `consultation-requests/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub id: ResourceId,
    pub user: UserProfile,
    pub subject: String,
    pub description: String,
    pub consultation_type: String,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub status: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for ConsultationRequest {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.subject, self.user.full_name())
    }
}

/// Definition of the consultation requests collection.
pub struct ConsultationRequestResource;

impl ResourceDefinition for ConsultationRequestResource {
    type Record = ConsultationRequest;

    const NAME: &'static str = "consultation-requests";
    const ENDPOINT: &'static str = "consultation-requests/";
    const SEARCHABLE: bool = true;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("consultation request", "consultation requests"),
            Locale::Fa => ResourceLabels::new("درخواست مشاوره", "درخواست‌های مشاوره"),
        }
    }
}
