//! Schema-less records for callers that only need ids and a label.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Resource, ResourceId};

/// Top-level fields searched by [`DynamicRecord::matches`], besides the
/// embedded user's name and national code.
const SEARCH_FIELDS: [&str; 6] = [
    "name",
    "nameCeo",
    "activity",
    "city",
    "specialty",
    "medicalCode",
];

/// Any record with a numeric `id`; every other field is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    pub id: ResourceId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DynamicRecord {
    /// A top-level string field, if present and non-empty.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// A top-level scalar field rendered as text.
    fn scalar(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    fn user_field(&self, key: &str) -> Option<&str> {
        self.fields.get("user")?.get(key)?.as_str()
    }

    fn user_name(&self) -> Option<String> {
        let user = self.fields.get("user")?.as_object()?;
        let part = |key: &str| user.get(key).and_then(Value::as_str).unwrap_or_default();
        let name = format!("{} {}", part("first_name"), part("last_name"));
        let name = name.trim();
        if name.is_empty() {
            user.get("username")
                .and_then(Value::as_str)
                .map(str::to_string)
        } else {
            Some(name.to_string())
        }
    }
}

impl Resource for DynamicRecord {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.text("name")
            .or_else(|| self.text("subject"))
            .map(str::to_string)
            .or_else(|| self.user_name())
            .unwrap_or_else(|| format!("#{}", self.id))
    }

    /// Matches the fields the list views search locally: the person's name
    /// and national code for person-like records, code and specialty for
    /// doctors, and name, CEO, activity and city for companies.
    fn matches(&self, needle: &str) -> bool {
        let person = [
            self.user_name(),
            self.user_field("national_code").map(str::to_string),
        ];
        person
            .into_iter()
            .flatten()
            .chain(SEARCH_FIELDS.iter().filter_map(|key| self.scalar(key)))
            .any(|text| text.to_lowercase().contains(needle))
    }
}
