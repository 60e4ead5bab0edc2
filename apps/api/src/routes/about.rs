use axum::Json;
use serde_json::{json, Value};

use crate::llm_client::MODEL;

/// GET /api/v1/about
/// Static content for the About page.
pub async fn about_handler() -> Json<Value> {
    Json(json!({
        "title": "Personalized Career & Skills Advisor",
        "description": "Tell us about yourself and get personalized career options, \
            a skills assessment and learning resources, generated live by an AI model.",
        "pages": ["Career Advisor", "Skills Assessment", "Learning Resources", "About"],
        "model": MODEL,
        "privacy": "Form values are used only to build the request for this session and are never stored."
    }))
}
