pub mod about;
pub mod catalog;
pub mod health;
pub mod sse;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers::handle_career_advice;
use crate::resources::handlers::handle_learning_resources;
use crate::skills::handlers::{handle_skills_assessment, handle_skills_summary};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/about", get(about::about_handler))
        // Form option lists
        .route("/api/v1/catalog", get(catalog::handle_catalog))
        .route(
            "/api/v1/catalog/fields/:field/skills",
            get(catalog::handle_field_skills),
        )
        // Career Advisor
        .route("/api/v1/career-advice", post(handle_career_advice))
        // Skills Assessment
        .route("/api/v1/skills/assessment", post(handle_skills_assessment))
        .route("/api/v1/skills/summary", post(handle_skills_summary))
        // Learning Resources
        .route(
            "/api/v1/learning-resources",
            post(handle_learning_resources),
        )
        .with_state(state)
}
