//! Axum route handlers for the Learning Resources page.

use axum::{extract::State, http::HeaderMap, response::Response};
use tracing::info;

use crate::errors::AppError;
use crate::forms::FormJson;
use crate::resources::models::LearningResourcesInput;
use crate::resources::prompts::build_learning_resources_prompt;
use crate::routes::sse::completion_response;
use crate::state::AppState;

/// POST /api/v1/learning-resources
pub async fn handle_learning_resources(
    State(state): State<AppState>,
    headers: HeaderMap,
    FormJson(input): FormJson<LearningResourcesInput>,
) -> Result<Response, AppError> {
    let prompt = build_learning_resources_prompt(&input)?;

    info!(
        "Learning resources requested: field={}, type={:?}",
        input.field.trim(),
        input.resource_type
    );

    Ok(completion_response(&state, &headers, prompt).await)
}
