//! Patient metadata captured on the second wizard step.
//!
//! Exists only to personalize the exported report; never cross-checked
//! against the clinical parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PatientError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Age must be between 1 and 120")]
    AgeOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        }
    }

    /// Lenient form parsing: the gender select is optional and an empty or
    /// unknown value means the patient did not answer.
    pub fn from_form(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("male") => Self::Male,
            Some("female") => Self::Female,
            Some("other") => Self::Other,
            _ => Self::Unspecified,
        }
    }

    /// Display form used by the report ("Not specified" when unanswered).
    pub fn report_label(&self) -> &'static str {
        match self {
            Self::Unspecified => "Not specified",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl PatientInfo {
    /// Validates on construction: trimmed name of at least 2 characters,
    /// age within 1-120.
    pub fn new(name: &str, age: u32, gender: Gender) -> Result<Self, PatientError> {
        let name = name.trim();
        if name.chars().count() < 2 {
            return Err(PatientError::NameTooShort);
        }
        if !(1..=120).contains(&age) {
            return Err(PatientError::AgeOutOfRange);
        }
        Ok(Self {
            name: name.to_string(),
            age,
            gender,
        })
    }
}
