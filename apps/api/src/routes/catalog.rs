//! Option lists for the form widgets.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::advisor::models::EducationLevel;
use crate::resources::models::ResourceType;
use crate::skills::catalog::{
    field_names, technical_skills_for, CurrentRole, FIELD_SKILLS, SOFT_SKILLS,
};
use crate::skills::rating::{DEFAULT_RATING, MAX_RATING, MIN_RATING};

#[derive(Debug, Serialize)]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub fields: Vec<&'static str>,
    pub soft_skills: &'static [&'static str],
    pub roles: Vec<&'static str>,
    pub education_levels: Vec<&'static str>,
    pub resource_types: Vec<&'static str>,
    pub rating: SliderRange,
}

#[derive(Debug, Serialize)]
pub struct FieldSkillsResponse {
    pub field: String,
    /// False when the generic fallback list was returned.
    pub known_field: bool,
    pub technical_skills: &'static [&'static str],
}

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        fields: field_names(),
        soft_skills: SOFT_SKILLS,
        roles: CurrentRole::ALL.iter().map(CurrentRole::label).collect(),
        education_levels: EducationLevel::ALL.iter().map(EducationLevel::label).collect(),
        resource_types: ResourceType::ALL.iter().map(ResourceType::label).collect(),
        rating: SliderRange {
            min: MIN_RATING,
            max: MAX_RATING,
            default: DEFAULT_RATING,
        },
    })
}

/// GET /api/v1/catalog/fields/:field/skills
pub async fn handle_field_skills(Path(field): Path<String>) -> Json<FieldSkillsResponse> {
    let known_field = FIELD_SKILLS.iter().any(|(name, _)| *name == field);
    let technical_skills = technical_skills_for(&field);
    Json(FieldSkillsResponse {
        field,
        known_field,
        technical_skills,
    })
}
