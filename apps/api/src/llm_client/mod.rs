//! LLM Client: the single point of entry for all Gemini API calls in the advisor.
//!
//! ARCHITECTURAL RULE: No other module may call the generative-AI API directly.
//! All model interactions MUST go through a `CompletionBackend`.
//!
//! Model: gemini-2.5-flash-lite (hardcoded, do not make configurable)
use async_trait::async_trait;
use futures::stream::BoxStream;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
pub mod sse;
pub mod streaming;

/// The model used for all completions.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash-lite";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response chunk: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response blocked by the model: {0}")]
    Blocked(String),

    #[error("Stream error: {0}")]
    Stream(String),
}

/// Ordered text fragments of one completion. Each item is a non-empty string.
pub type FragmentStream = BoxStream<'static, Result<String, LlmError>>;

/// A remote text-generation service that can deliver a completion incrementally.
///
/// One call opens one request. Implementations must not retry or cache.
/// Carried in `AppState` as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn open_stream(&self, model: &str, prompt: &str) -> Result<FragmentStream, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

/// `{"error": {...}}` envelope, returned both as an HTTP error body and
/// occasionally as a payload inside an open stream.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}

/// Streaming client for the Gemini `streamGenerateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
    thinking_budget: Option<u32>,
}

impl GeminiClient {
    /// No request timeout is set: a stream may run as long as the transport allows.
    pub fn new(
        api_key: String,
        api_base: String,
        thinking_budget: Option<u32>,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            api_base,
            thinking_budget,
        })
    }

    fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.api_base, model
        )
    }
}

fn build_request(prompt: &str, thinking_budget: Option<u32>) -> GenerateContentRequest<'_> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        generation_config: thinking_budget.map(|thinking_budget| GenerationConfig {
            thinking_config: ThinkingConfig { thinking_budget },
        }),
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn open_stream(&self, model: &str, prompt: &str) -> Result<FragmentStream, LlmError> {
        let request_body = build_request(prompt, self.thinking_budget);

        let response = self
            .client
            .post(self.stream_url(model))
            .header("x-goog-api-key", &self.api_key)
            .header("accept", "text/event-stream")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            // Try to parse error message
            let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Gemini stream opened for model {model}");
        Ok(sse::decode_fragments(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{http::StatusCode, Router};
    use futures::StreamExt;

    #[test]
    fn test_request_is_a_single_user_message() {
        let body = serde_json::to_value(build_request("Hi there", None)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "Hi there"}]}]
            })
        );
    }

    #[test]
    fn test_thinking_budget_only_sent_when_configured() {
        let body = serde_json::to_value(build_request("Hi", Some(0))).unwrap();
        assert_eq!(
            body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            serde_json::json!(0)
        );
    }

    #[test]
    fn test_stream_url_targets_sse_endpoint() {
        let client = GeminiClient::new(
            "key".to_string(),
            "https://example.test/v1beta".to_string(),
            None,
        )
        .unwrap();
        assert_eq!(
            client.stream_url(MODEL),
            "https://example.test/v1beta/models/gemini-2.5-flash-lite:streamGenerateContent?alt=sse"
        );
    }

    /// Serves one canned response for every request on an ephemeral local port.
    async fn canned_api(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().fallback(move || async move { (status, body) });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/v1beta")
    }

    async fn open(api_base: String) -> Result<FragmentStream, LlmError> {
        GeminiClient::new("key".to_string(), api_base, None)
            .unwrap()
            .open_stream(MODEL, "Hi")
            .await
    }

    #[tokio::test]
    async fn test_error_envelope_message_is_extracted() {
        let base = canned_api(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#,
        )
        .await;

        match open(base).await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Quota exceeded");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an API error"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_error_body_is_kept_verbatim() {
        let base = canned_api(StatusCode::SERVICE_UNAVAILABLE, "upstream down").await;

        match open(base).await {
            Err(LlmError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an API error"),
        }
    }

    #[tokio::test]
    async fn test_success_body_is_decoded_into_fragments() {
        let base = canned_api(
            StatusCode::OK,
            "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hello\"}]}}]}\n\n\
             data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\" world\"}]}}]}\n\n",
        )
        .await;

        let fragments: Vec<String> = open(base)
            .await
            .unwrap_or_else(|e| panic!("stream failed to open: {e}"))
            .map(|f| f.unwrap())
            .collect()
            .await;
        assert_eq!(fragments, vec!["Hello", " world"]);
    }

    #[test]
    fn test_error_display_is_human_readable() {
        let err = LlmError::Api {
            status: 429,
            message: "Quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 429): Quota exceeded");
    }
}
