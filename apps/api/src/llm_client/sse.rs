//! Server-Sent Events decoding for Gemini `streamGenerateContent?alt=sse`.
//!
//! Bytes arrive in arbitrary chunks; a `data:` line may be split across chunks
//! (even mid-codepoint), so lines are buffered as raw bytes until complete.

use async_stream::try_stream;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::Deserialize;
use tracing::debug;

use super::{ApiErrorEnvelope, FragmentStream, LlmError};

/// Finish reasons that mean the model stopped without producing the answer.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Incremental SSE line decoder. Yields the `data` payload of each complete event.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseDecoder {
    /// Feeds a chunk and returns the payloads of every event it completes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut events = Vec::new();

        while let Some(newline_pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
            let line = String::from_utf8_lossy(&line);
            self.process_line(line.trim_end_matches(['\n', '\r']), &mut events);
        }

        events
    }

    /// Flushes a trailing line and any event not terminated by a blank line.
    pub fn finish(&mut self) -> Vec<String> {
        let mut events = Vec::new();
        if !self.buffer.is_empty() {
            let line = String::from_utf8_lossy(&self.buffer).into_owned();
            self.buffer.clear();
            self.process_line(line.trim_end_matches('\r'), &mut events);
        }
        self.dispatch(&mut events);
        events
    }

    fn process_line(&mut self, line: &str, events: &mut Vec<String>) {
        if line.is_empty() {
            self.dispatch(events);
        } else if let Some(value) = line.strip_prefix("data:") {
            self.data
                .push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
        // `event:`, `id:`, `retry:` and `:` comments carry nothing we use
    }

    fn dispatch(&mut self, events: &mut Vec<String>) {
        if !self.data.is_empty() {
            events.push(self.data.join("\n"));
            self.data.clear();
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    /// Thought summaries are not part of the answer.
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Extracts the answer text carried by one SSE payload.
///
/// Returns `Ok(None)` for payloads with no text (usage-only or finish chunks).
pub fn parse_chunk(data: &str) -> Result<Option<String>, LlmError> {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(data) {
        return Err(LlmError::Api {
            status: envelope.error.code.unwrap_or(0),
            message: envelope.error.message,
        });
    }

    let chunk: StreamChunk = serde_json::from_str(data)?;

    if let Some(reason) = chunk.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(LlmError::Blocked(reason));
    }

    let Some(candidate) = chunk.candidates.into_iter().next() else {
        return Ok(None);
    };

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter(|p| !p.thought)
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        if let Some(reason) = candidate.finish_reason {
            if BLOCKING_FINISH_REASONS.contains(&reason.as_str()) {
                return Err(LlmError::Blocked(reason));
            }
        }
        return Ok(None);
    }

    Ok(Some(text))
}

/// Turns a raw SSE byte stream into a stream of non-empty text fragments.
/// The first fault ends the stream.
pub fn decode_fragments<S, E>(body: S) -> FragmentStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Into<LlmError> + Send + 'static,
{
    Box::pin(fragments(body))
}

fn fragments<S, E>(body: S) -> impl Stream<Item = Result<String, LlmError>> + Send
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Into<LlmError> + Send + 'static,
{
    try_stream! {
        let mut body = Box::pin(body);
        let mut decoder = SseDecoder::default();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(Into::<LlmError>::into)?;
            for data in decoder.push(&chunk) {
                if let Some(text) = parse_chunk(&data)? {
                    yield text;
                }
            }
        }

        for data in decoder.finish() {
            if let Some(text) = parse_chunk(&data)? {
                yield text;
            }
        }
        debug!("SSE body closed");
    }
}
