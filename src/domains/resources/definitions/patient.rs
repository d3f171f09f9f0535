//! Patients registered for support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A patient as served by `patients/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Patient {
    pub id: ResourceId,
    pub presenter_national_code: Option<String>,
    pub presenter_first_name: Option<String>,
    pub presenter_last_name: Option<String>,
    pub father_name: String,
    pub age: u32,
    pub marital_status: String,
    pub head_house_hold: bool,
    pub number_dependents: u32,
    pub family_status: String,
    pub job_status: bool,
    pub skill: String,
    pub home_status: String,
    pub line_number: String,
    pub organ: String,
    pub bank_card_number: String,
    pub insurance: String,
    pub sickness_description: String,
    #[serde(rename = "familiar1Name")]
    pub familiar1_name: String,
    #[serde(rename = "familiar1FamilyName")]
    pub familiar1_family_name: String,
    #[serde(rename = "familiar1PhoneNumber")]
    pub familiar1_phone_number: String,
    #[serde(rename = "familiar2Name")]
    pub familiar2_name: String,
    #[serde(rename = "familiar2FamilyName")]
    pub familiar2_family_name: String,
    #[serde(rename = "familiar2PhoneNumber")]
    pub familiar2_phone_number: String,
    pub national_card_image: Option<String>,
    pub national_certificate_image: Option<String>,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Resource for Patient {
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

/// Definition of the patients collection.
pub struct PatientResource;

impl ResourceDefinition for PatientResource {
    type Record = Patient;

    const NAME: &'static str = "patients";
    const ENDPOINT: &'static str = "patients/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("patient", "patients"),
            Locale::Fa => ResourceLabels::new("بیمار", "بیماران"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_patient() {
        let patient: Patient = serde_json::from_value(json!({
            "id": 5,
            "fatherName": "Mahmoud",
            "age": 61,
            "headHouseHold": true,
            "numberDependents": 3,
            "familiar1Name": "Nima",
            "nationalCardImage": null,
            "user": {"username": "0098765432", "first_name": "", "last_name": ""}
        }))
        .unwrap();

        assert_eq!(patient.age, 61);
        assert!(patient.head_house_hold);
        assert_eq!(patient.familiar1_name, "Nima");
        assert_eq!(patient.display_name(), "0098765432");
    }

    #[test]
    fn test_matches_name_or_national_code() {
        let record: Patient = serde_json::from_value(json!({
            "id": 3,
            "user": {
                "first_name": "Reza",
                "last_name": "Karimi",
                "national_code": "0012345678"
            }
        }))
        .unwrap();

        assert!(record.matches("0012345678"));
        assert!(record.matches("reza kar"));
        assert!(!record.matches("tehran"));
    }
}
