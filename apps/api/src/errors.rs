use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Warning shown when a required form field is left empty.
pub const FILL_ALL_FIELDS_WARNING: &str = "Please fill in all fields for the best advice.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Remote model faults are not represented here: once a completion stream has
/// started they are folded into its final text (see `llm_client::streaming`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Validation failure for one or more empty required fields.
    pub fn missing_fields(fields: &[&str]) -> Self {
        AppError::Validation(format!(
            "{FILL_ALL_FIELDS_WARNING} Missing: {}",
            fields.join(", ")
        ))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!(
            "{FILL_ALL_FIELDS_WARNING} {}",
            rejection.body_text()
        ))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                tracing::info!("Rejected submission: {msg}");
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_lists_every_field() {
        let err = AppError::missing_fields(&["name", "interests"]);
        let msg = err.to_string();
        assert!(msg.contains(FILL_ALL_FIELDS_WARNING));
        assert!(msg.ends_with("Missing: name, interests"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
