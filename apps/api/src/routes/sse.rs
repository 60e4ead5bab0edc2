//! Response framing for completions.
//!
//! By default a completion is sent as SSE: `progress` carries the accumulator
//! after each fragment, and `complete` is sent exactly once with the final
//! text, which may be a substituted error. Clients that ask only for
//! `application/json` get the final body in one piece instead.

use axum::{
    http::{header, HeaderMap},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use chrono::{DateTime, Utc};
use futures::{Stream, StreamExt};
use serde::Serialize;
use serde_json::json;

use crate::llm_client::streaming::{
    collect_completion, stream_completion, CompletionEvent, CompletionOutcome,
};
use crate::llm_client::MODEL;
use crate::state::AppState;

/// Final completion body, shared by the `complete` event and the JSON response.
#[derive(Debug, Serialize)]
pub struct CompletionBody {
    pub text: String,
    pub failed: bool,
    pub model: &'static str,
    pub completed_at: DateTime<Utc>,
}

impl From<CompletionOutcome> for CompletionBody {
    fn from(outcome: CompletionOutcome) -> Self {
        Self {
            text: outcome.text,
            failed: outcome.failed,
            model: MODEL,
            completed_at: outcome.completed_at,
        }
    }
}

/// Each `progress` event carries the whole accumulator, not the new fragment,
/// so a client only ever renders the latest event. Bytes sent grow
/// quadratically with answer length.
pub fn completion_sse(
    state: &AppState,
    prompt: String,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let events = stream_completion(state.llm.clone(), MODEL.to_string(), prompt).map(
        |event| match event {
            CompletionEvent::Progress(text) => {
                Event::default().event("progress").json_data(json!({ "text": text }))
            }
            CompletionEvent::Complete(outcome) => Event::default()
                .event("complete")
                .json_data(CompletionBody::from(outcome)),
        },
    );

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json") && !accept.contains("text/event-stream"))
        .unwrap_or(false)
}

/// SSE unless the client explicitly asked for JSON only.
pub async fn completion_response(state: &AppState, headers: &HeaderMap, prompt: String) -> Response {
    if wants_json(headers) {
        let outcome = collect_completion(state.llm.clone(), MODEL.to_string(), prompt, |_| {}).await;
        return Json(CompletionBody::from(outcome)).into_response();
    }
    completion_sse(state, prompt).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn accept(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_sse_is_the_default() {
        assert!(!wants_json(&HeaderMap::new()));
        assert!(!wants_json(&accept("*/*")));
        assert!(!wants_json(&accept("text/event-stream")));
    }

    #[test]
    fn test_json_only_when_asked_for_exclusively() {
        assert!(wants_json(&accept("application/json")));
        assert!(!wants_json(&accept("text/event-stream, application/json")));
    }
}
