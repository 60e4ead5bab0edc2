//! Presentation data for the skills results page.
//!
//! Derived only from the submitted ratings, never from model output.
//! The UI's charting widget renders these series as-is.

use serde::Serialize;

use crate::skills::models::{SkillRating, SkillsAssessmentInput};
use crate::skills::rating::{RatingCategory, MAX_RATING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Technical,
    Soft,
}

/// One row of the results table.
#[derive(Debug, Clone, Serialize)]
pub struct SkillRow {
    pub skill: String,
    pub kind: SkillKind,
    pub rating: u8,
    /// rating / 5, drives the progress bar column.
    pub progress: f32,
    pub category: RatingCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarChart {
    pub axes: Vec<String>,
    pub values: Vec<u8>,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarChart {
    pub series: Vec<BarSeries>,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsSummary {
    pub field: String,
    pub current_role: String,
    pub table: Vec<SkillRow>,
    pub radar: RadarChart,
    pub bar: BarChart,
    /// `None` when the list is empty.
    pub average_technical: Option<f32>,
    pub average_soft: Option<f32>,
}

fn rows(kind: SkillKind, ratings: &[SkillRating]) -> impl Iterator<Item = SkillRow> + '_ {
    ratings.iter().map(move |r| SkillRow {
        skill: r.skill.clone(),
        kind,
        rating: r.rating,
        progress: f32::from(r.rating) / f32::from(MAX_RATING),
        category: RatingCategory::from_rating(r.rating),
    })
}

fn average(ratings: &[SkillRating]) -> Option<f32> {
    if ratings.is_empty() {
        return None;
    }
    let total: u32 = ratings.iter().map(|r| u32::from(r.rating)).sum();
    Some(total as f32 / ratings.len() as f32)
}

fn bar_series(name: &str, ratings: &[SkillRating]) -> BarSeries {
    BarSeries {
        name: name.to_string(),
        labels: ratings.iter().map(|r| r.skill.clone()).collect(),
        values: ratings.iter().map(|r| r.rating).collect(),
    }
}

/// Builds the results table and chart series for a validated assessment.
pub fn summarize(input: &SkillsAssessmentInput) -> SkillsSummary {
    let table: Vec<SkillRow> = rows(SkillKind::Technical, &input.technical_skills)
        .chain(rows(SkillKind::Soft, &input.soft_skills))
        .collect();

    let radar = RadarChart {
        axes: table.iter().map(|row| row.skill.clone()).collect(),
        values: table.iter().map(|row| row.rating).collect(),
        max: MAX_RATING,
    };

    let bar = BarChart {
        series: vec![
            bar_series("Technical Skills", &input.technical_skills),
            bar_series("Soft Skills", &input.soft_skills),
        ],
        max: MAX_RATING,
    };

    SkillsSummary {
        field: input.field.clone(),
        current_role: input.current_role.label().to_string(),
        table,
        radar,
        bar,
        average_technical: average(&input.technical_skills),
        average_soft: average(&input.soft_skills),
    }
}
