use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::forms::null_as_empty;

/// Highest education level the user selects on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Postgraduate,
    Professional,
    #[serde(alias = "Others")]
    Other,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Postgraduate,
        EducationLevel::Professional,
        EducationLevel::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Professional => "Professional",
            EducationLevel::Other => "Other",
        }
    }

    /// First-person phrase used in the career advice prompt.
    pub fn self_description(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "I am currently a High School student.",
            EducationLevel::Undergraduate => "I am currently an Undergraduate student.",
            EducationLevel::Postgraduate => "I am currently a Postgraduate student.",
            EducationLevel::Professional => "I am currently a working Professional.",
            EducationLevel::Other => "My education background is non-traditional.",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EducationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High School" => Ok(EducationLevel::HighSchool),
            "Undergraduate" => Ok(EducationLevel::Undergraduate),
            "Postgraduate" => Ok(EducationLevel::Postgraduate),
            "Professional" => Ok(EducationLevel::Professional),
            "Other" | "Others" => Ok(EducationLevel::Other),
            other => Err(format!("unknown education level '{other}'")),
        }
    }
}

/// One career advice form submission. Never persisted.
///
/// Missing, `null` or blank fields deserialize to empty values so that the prompt
/// builder can report every missing field at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub interests: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills_have: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills_want: String,
    #[serde(default)]
    pub hobbies: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<EducationLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
