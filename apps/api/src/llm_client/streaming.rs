//! Streaming completion: accumulates fragments into a growing string.
//!
//! A remote fault never escapes: it ends accumulation and replaces the final
//! value with `"An error occurred: <details>"`. No retry, no caching.

use std::sync::Arc;

use async_stream::stream;
use chrono::{DateTime, Utc};
use futures::{stream::BoxStream, Stream, StreamExt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{CompletionBackend, LlmError};

/// Prefix of the text substituted for a failed completion.
pub const ERROR_PREFIX: &str = "An error occurred";

/// Running concatenation of fragments, in arrival order.
#[derive(Debug, Default)]
pub struct Accumulator {
    text: String,
}

impl Accumulator {
    /// Appends a fragment and returns the accumulator's new value.
    pub fn push(&mut self, fragment: &str) -> &str {
        self.text.push_str(fragment);
        &self.text
    }

    pub fn current(&self) -> &str {
        &self.text
    }

    pub fn into_final(self) -> String {
        self.text
    }
}

/// Final value of one completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    pub text: String,
    /// True when `text` is a substituted error message rather than model output.
    pub failed: bool,
    pub completed_at: DateTime<Utc>,
}

impl CompletionOutcome {
    fn success(text: String) -> Self {
        Self {
            text,
            failed: false,
            completed_at: Utc::now(),
        }
    }

    fn failure(error: &LlmError) -> Self {
        Self {
            text: format!("{ERROR_PREFIX}: {error}"),
            failed: true,
            completed_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionEvent {
    /// Accumulator value after one more fragment.
    Progress(String),
    /// Always the last event.
    Complete(CompletionOutcome),
}

/// Opens one completion and yields `Progress` after every fragment, then one `Complete`.
pub fn stream_completion(
    backend: Arc<dyn CompletionBackend>,
    model: String,
    prompt: String,
) -> BoxStream<'static, CompletionEvent> {
    Box::pin(completion_events(backend, model, prompt))
}

fn completion_events(
    backend: Arc<dyn CompletionBackend>,
    model: String,
    prompt: String,
) -> impl Stream<Item = CompletionEvent> + Send {
    stream! {
        let request_id = Uuid::new_v4();
        info!(%request_id, %model, prompt_chars = prompt.len(), "Opening completion stream");

        let outcome = match backend.open_stream(&model, &prompt).await {
            Err(e) => {
                warn!(%request_id, "Completion request failed: {e}");
                CompletionOutcome::failure(&e)
            }
            Ok(mut fragments) => {
                let mut accumulator = Accumulator::default();
                let mut fragment_count = 0usize;
                let mut fault = None;

                while let Some(item) = fragments.next().await {
                    match item {
                        Ok(fragment) if fragment.is_empty() => continue,
                        Ok(fragment) => {
                            fragment_count += 1;
                            debug!(%request_id, fragment_count, chars = fragment.len(), "Fragment received");
                            yield CompletionEvent::Progress(accumulator.push(&fragment).to_string());
                        }
                        Err(e) => {
                            fault = Some(e);
                            break;
                        }
                    }
                }

                match fault {
                    Some(e) => {
                        warn!(
                            %request_id,
                            fragment_count,
                            partial_chars = accumulator.current().len(),
                            "Completion stream failed: {e}"
                        );
                        CompletionOutcome::failure(&e)
                    }
                    None => {
                        info!(%request_id, fragment_count, "Completion stream finished");
                        CompletionOutcome::success(accumulator.into_final())
                    }
                }
            }
        };

        yield CompletionEvent::Complete(outcome);
    }
}

/// Drives a completion to its end, reporting each accumulator value to `on_progress`.
pub async fn collect_completion<F>(
    backend: Arc<dyn CompletionBackend>,
    model: String,
    prompt: String,
    mut on_progress: F,
) -> CompletionOutcome
where
    F: FnMut(&str),
{
    let mut events = stream_completion(backend, model, prompt);
    while let Some(event) = events.next().await {
        match event {
            CompletionEvent::Progress(text) => on_progress(&text),
            CompletionEvent::Complete(outcome) => return outcome,
        }
    }
    // `completion_events` always ends with `Complete`
    CompletionOutcome::failure(&LlmError::Stream(
        "stream ended without a final value".to_string(),
    ))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use futures::stream;

    use crate::llm_client::FragmentStream;

    /// Scripted backend: replays fragments, optionally failing at the end, and counts calls.
    pub(crate) struct ScriptedBackend {
        fragments: Vec<&'static str>,
        fail_after: Option<&'static str>,
        fail_on_open: bool,
        pub calls: AtomicUsize,
        pub last_prompt: std::sync::Mutex<Option<String>>,
    }

    impl ScriptedBackend {
        pub(crate) fn replying(fragments: Vec<&'static str>) -> Self {
            Self {
                fragments,
                fail_after: None,
                fail_on_open: false,
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
            }
        }

        pub(crate) fn failing_after(fragments: Vec<&'static str>, message: &'static str) -> Self {
            Self {
                fail_after: Some(message),
                ..Self::replying(fragments)
            }
        }

        pub(crate) fn failing_on_open() -> Self {
            Self {
                fail_on_open: true,
                ..Self::replying(vec![])
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn open_stream(
            &self,
            _model: &str,
            prompt: &str,
        ) -> Result<FragmentStream, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            if self.fail_on_open {
                return Err(LlmError::Api {
                    status: 401,
                    message: "API key not valid".to_string(),
                });
            }
            let mut items: Vec<Result<String, LlmError>> =
                self.fragments.iter().map(|f| Ok(f.to_string())).collect();
            if let Some(message) = self.fail_after {
                items.push(Err(LlmError::Stream(message.to_string())));
                items.push(Ok("after the fault".to_string()));
            }
            Ok(Box::pin(stream::iter(items)))
        }
    }

    async fn run(backend: ScriptedBackend) -> (Vec<String>, CompletionOutcome) {
        let mut progress = Vec::new();
        let outcome = collect_completion(
            Arc::new(backend),
            "test-model".to_string(),
            "prompt".to_string(),
            |text| progress.push(text.to_string()),
        )
        .await;
        (progress, outcome)
    }

    #[test]
    fn test_accumulator_appends_in_order() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.push("a"), "a");
        assert_eq!(acc.push("b"), "ab");
        assert_eq!(acc.current(), "ab");
        assert_eq!(acc.into_final(), "ab");
    }

    #[tokio::test]
    async fn test_accumulation_order() {
        let (progress, outcome) = run(ScriptedBackend::replying(vec!["Hello", ", ", "world"])).await;
        assert_eq!(progress, vec!["Hello", "Hello, ", "Hello, world"]);
        assert_eq!(outcome.text, "Hello, world");
        assert!(!outcome.failed);
    }

    #[tokio::test]
    async fn test_empty_fragments_are_skipped() {
        let (progress, outcome) = run(ScriptedBackend::replying(vec!["a", "", "b"])).await;
        assert_eq!(progress, vec!["a", "ab"]);
        assert_eq!(outcome.text, "ab");
    }

    #[tokio::test]
    async fn test_fault_mid_stream_substitutes_error() {
        let (progress, outcome) =
            run(ScriptedBackend::failing_after(vec!["Partial"], "connection reset")).await;
        assert_eq!(progress, vec!["Partial"]);
        assert!(outcome.failed);
        assert!(outcome.text.starts_with(ERROR_PREFIX));
        assert_ne!(outcome.text, "Partial");
        assert!(outcome.text.contains("connection reset"));
        assert!(!outcome.text.contains("after the fault"));
    }

    #[tokio::test]
    async fn test_fault_on_open_substitutes_error() {
        let (progress, outcome) = run(ScriptedBackend::failing_on_open()).await;
        assert!(progress.is_empty());
        assert!(outcome.failed);
        assert_eq!(
            outcome.text,
            "An error occurred: API error (status 401): API key not valid"
        );
    }

    #[tokio::test]
    async fn test_empty_stream_completes_with_empty_text() {
        let (progress, outcome) = run(ScriptedBackend::replying(vec![])).await;
        assert!(progress.is_empty());
        assert_eq!(outcome.text, "");
        assert!(!outcome.failed);
    }

    #[tokio::test]
    async fn test_stream_ends_with_single_complete_event() {
        let backend: Arc<dyn CompletionBackend> =
            Arc::new(ScriptedBackend::replying(vec!["x", "y"]));
        let events: Vec<CompletionEvent> =
            stream_completion(backend, "m".to_string(), "p".to_string())
                .collect()
                .await;
        assert_eq!(events.len(), 3);
        assert!(matches!(events.last(), Some(CompletionEvent::Complete(_))));
    }

    #[tokio::test]
    async fn test_identical_prompts_make_independent_calls() {
        let backend = Arc::new(ScriptedBackend::replying(vec!["ok"]));
        for _ in 0..2 {
            collect_completion(
                backend.clone(),
                "m".to_string(),
                "same prompt".to_string(),
                |_| {},
            )
            .await;
        }
        assert_eq!(backend.call_count(), 2);
    }
}
