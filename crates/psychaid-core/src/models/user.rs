use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Identity and intake metadata for the person being assessed.
///
/// Built once by the intake step and passed by value afterwards; nothing
/// downstream mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserInfo {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub current_medications: Option<String>,
    #[serde(default = "today")]
    pub assessment_date: String,
}

impl UserInfo {
    /// A record with only the required identity fields set and the
    /// assessment date defaulted to today.
    pub fn new(name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            occupation: None,
            contact_info: None,
            emergency_contact: None,
            medical_history: None,
            current_medications: None,
            assessment_date: today(),
        }
    }

    /// Check the required identity fields: non-blank name and gender, age ≥ 1.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name".to_string()));
        }
        if self.age < 1 {
            return Err(CoreError::InvalidField {
                field: "age".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.gender.trim().is_empty() {
            return Err(CoreError::MissingField("gender".to_string()));
        }
        Ok(())
    }
}

/// Return an optional free-text field only when it carries content.
pub fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn today() -> String {
    jiff::Zoned::now().date().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_identity_passes() {
        assert!(UserInfo::new("Jane Doe", 34, "female").validate().is_ok());
    }

    #[test]
    fn blank_name_is_missing() {
        let info = UserInfo::new("   ", 34, "female");
        assert!(matches!(info.validate(), Err(CoreError::MissingField(f)) if f == "name"));
    }

    #[test]
    fn zero_age_is_invalid() {
        let info = UserInfo::new("Jane", 0, "female");
        assert!(matches!(info.validate(), Err(CoreError::InvalidField { field, .. }) if field == "age"));
    }

    #[test]
    fn empty_gender_is_missing() {
        let info = UserInfo::new("Jane", 30, "");
        assert!(matches!(info.validate(), Err(CoreError::MissingField(f)) if f == "gender"));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let info: UserInfo =
            serde_json::from_str(r#"{"name":"Sam","age":41,"gender":"male"}"#).unwrap();
        assert_eq!(info.occupation, None);
        assert_eq!(info.assessment_date.len(), "2024-01-01".len());
    }

    #[test]
    fn blank_optional_text_is_not_provided() {
        assert_eq!(provided(&Some("  ".to_string())), None);
        assert_eq!(provided(&Some("asthma".to_string())), Some("asthma"));
        assert_eq!(provided(&None), None);
    }
}
