//! Axum route handlers for the Skills Assessment page.

use axum::{extract::State, http::HeaderMap, response::Response, Json};
use tracing::info;

use crate::errors::AppError;
use crate::forms::FormJson;
use crate::routes::sse::completion_response;
use crate::skills::charts::{summarize, SkillsSummary};
use crate::skills::models::SkillsAssessmentInput;
use crate::skills::prompts::build_skills_assessment_prompt;
use crate::state::AppState;

/// POST /api/v1/skills/assessment
///
/// Streams the model's assessment of the submitted ratings as SSE.
pub async fn handle_skills_assessment(
    State(state): State<AppState>,
    headers: HeaderMap,
    FormJson(input): FormJson<SkillsAssessmentInput>,
) -> Result<Response, AppError> {
    input.validate()?;

    let prompt = build_skills_assessment_prompt(&input);
    info!(
        "Skills assessment requested: field={}, role={}, ratings={}",
        input.field,
        input.current_role,
        input.technical_skills.len() + input.soft_skills.len()
    );

    Ok(completion_response(&state, &headers, prompt).await)
}

/// POST /api/v1/skills/summary
///
/// Results table and radar/bar chart series. Pure computation, no model call.
pub async fn handle_skills_summary(
    FormJson(input): FormJson<SkillsAssessmentInput>,
) -> Result<Json<SkillsSummary>, AppError> {
    input.validate()?;
    Ok(Json(summarize(&input)))
}
