//! Doctors volunteering with the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, ResourceDefinition, ResourceId, ResourceLabels, UserProfile, fields};
use crate::domains::notifications::Locale;

/// A doctor as served by `doctors/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Doctor {
    pub id: ResourceId,
    pub father_name: String,
    pub medical_code: i64,
    pub sec_phone_number: String,
    pub specialty: String,
    pub services: String,
    pub collab_type: String,
    pub contribution: String,
    #[serde(rename = "created_at", deserialize_with = "fields::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    pub user: UserProfile,
}

impl Resource for Doctor {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.user.full_name(), self.specialty)
    }

    fn matches(&self, needle: &str) -> bool {
        self.user.matches(needle)
            || self.medical_code.to_string().contains(needle)
            || self.specialty.to_lowercase().contains(needle)
    }
}

/// Definition of the doctors collection.
pub struct DoctorResource;

impl ResourceDefinition for DoctorResource {
    type Record = Doctor;

    const NAME: &'static str = "doctors";
    const ENDPOINT: &'static str = "doctors/";
    const SEARCHABLE: bool = false;

    fn labels(locale: Locale) -> ResourceLabels {
        match locale {
            Locale::En => ResourceLabels::new("doctor", "doctors"),
            Locale::Fa => ResourceLabels::new("پزشک", "پزشکان"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_doctor_with_nested_user() {
        let doctor: Doctor = serde_json::from_value(json!({
            "id": 8,
            "fatherName": "Hassan",
            "medicalCode": 123456,
            "specialty": "cardiology",
            "collabType": "volunteer",
            "user": {
                "username": "0012345678",
                "first_name": "Sara",
                "last_name": "Ahmadi",
                "national_code": "0012345678",
                "userType": "doctor"
            }
        }))
        .unwrap();

        assert_eq!(doctor.medical_code, 123456);
        assert_eq!(doctor.user.national_code, "0012345678");
        assert_eq!(doctor.display_name(), "Sara Ahmadi (cardiology)");
        assert!(doctor.created_at.is_none());
    }

    #[test]
    fn test_matches_codes_and_specialty() {
        let doctor = Doctor {
            medical_code: 998877,
            specialty: "Cardiology".to_string(),
            user: UserProfile {
                national_code: "0011223344".to_string(),
                ..UserProfile::default()
            },
            ..Doctor::default()
        };

        assert!(doctor.matches("8877"));
        assert!(doctor.matches("cardio"));
        assert!(doctor.matches("00112"));
        assert!(!doctor.matches("surgery"));
    }
}
