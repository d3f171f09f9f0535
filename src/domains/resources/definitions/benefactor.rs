//! Benefactors: people who contribute to the platform's causes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A benefactor as served by `benefactors/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Benefactor {
    pub id: ResourceId,
    pub land_line_number: String,
    pub contribution: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Resource for Benefactor {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.user.full_name()
    }

    fn matches(&self, needle: &str) -> bool {
        self.user.matches(needle)
    }
}

/// Definition of the benefactors collection.
pub struct BenefactorResource;

impl ResourceDefinition for BenefactorResource {
    type Record = Benefactor;

    const NAME: &'static str = "benefactors";
    const ENDPOINT: &'static str = "benefactors/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("benefactor", "benefactors"),
            Locale::Fa => ResourceLabels::new("فرد خیر", "افراد خیر"),
        }
    }
}
