//! Axum route handlers for the Career Advisor page.

use axum::{extract::State, http::HeaderMap, response::Response};
use tracing::info;

use crate::advisor::models::ProfileInput;
use crate::advisor::prompts::build_career_advice_prompt;
use crate::errors::AppError;
use crate::forms::FormJson;
use crate::routes::sse::completion_response;
use crate::state::AppState;

/// POST /api/v1/career-advice
///
/// Validates the profile and streams the model's advice as SSE.
/// A rejected submission never reaches the model.
pub async fn handle_career_advice(
    State(state): State<AppState>,
    headers: HeaderMap,
    FormJson(profile): FormJson<ProfileInput>,
) -> Result<Response, AppError> {
    let prompt = build_career_advice_prompt(&profile, state.config.require_hobbies)?;

    info!(
        "Career advice requested: education={:?}, prompt_chars={}",
        profile.education_level,
        prompt.len()
    );

    Ok(completion_response(&state, &headers, prompt).await)
}
