use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::forms::null_as_empty;
use crate::skills::catalog::{technical_skills_for, CurrentRole, SOFT_SKILLS};
use crate::skills::rating::{is_valid_rating, DEFAULT_RATING, MAX_RATING, MIN_RATING};

/// One slider value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub skill: String,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

#[cfg(test)]
impl SkillRating {
    pub fn new(skill: impl Into<String>, rating: u8) -> Self {
        Self {
            skill: skill.into(),
            rating,
        }
    }
}

/// Skills assessment form submission. Lists keep the order the form showed them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsAssessmentInput {
    pub current_role: CurrentRole,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default)]
    pub technical_skills: Vec<SkillRating>,
    #[serde(default)]
    pub soft_skills: Vec<SkillRating>,
}

impl SkillsAssessmentInput {
    /// Checks the rating invariants: every rating in 1–5, names unique per list,
    /// technical skills from the field's catalog list, soft skills from `SOFT_SKILLS`.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.field.trim().is_empty() {
            return Err(AppError::Validation("field must be selected".to_string()));
        }
        if self.technical_skills.is_empty() && self.soft_skills.is_empty() {
            return Err(AppError::Validation(
                "at least one skill rating is required".to_string(),
            ));
        }
        validate_ratings(
            "technical_skills",
            &self.technical_skills,
            technical_skills_for(&self.field),
        )?;
        validate_ratings("soft_skills", &self.soft_skills, SOFT_SKILLS)
    }
}

fn validate_ratings(
    list: &str,
    ratings: &[SkillRating],
    offered: &[&str],
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for entry in ratings {
        if entry.skill.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "{list}: skill name cannot be empty"
            )));
        }
        if !is_valid_rating(entry.rating) {
            return Err(AppError::Validation(format!(
                "{list}: rating for '{}' must be between {MIN_RATING} and {MAX_RATING}, got {}",
                entry.skill, entry.rating
            )));
        }
        if !offered.contains(&entry.skill.as_str()) {
            return Err(AppError::Validation(format!(
                "{list}: '{}' is not one of the offered skills",
                entry.skill
            )));
        }
        if !seen.insert(entry.skill.as_str()) {
            return Err(AppError::Validation(format!(
                "{list}: '{}' is rated more than once",
                entry.skill
            )));
        }
    }
    Ok(())
}
