use futures::StreamExt;
use reqwest::Client;
use serde::Deserialize;

use crate::llm::generator::Generator;

/// Client for the Gemini `streamGenerateContent` endpoint. Accumulates the
/// streamed candidate text into one string; a failure anywhere during the
/// request or while decoding the stream surfaces as a single error, never as
/// partial text.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Stream decode error: {0}")]
    Stream(String),
}

/// Models the hosted service currently exposes for content generation.
pub fn available_models() -> &'static [&'static str] {
    &["gemini-2.5-flash", "gemini-2.5-flash-lite"]
}

impl GeminiClient {
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        model_name: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
    ) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url,
            model_name.into(),
            self.api_key
        );

        let body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt.into() }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": temperature
            }
        });

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        let mut byte_stream = resp.bytes_stream();
        let mut pending: Vec<u8> = Vec::new();
        let mut full_text = String::new();

        while let Some(chunk) = byte_stream.next().await {
            let chunk = chunk
                .inspect_err(|e| tracing::error!(error = %e, "Failed to read response stream"))?;
            pending.extend_from_slice(&chunk);
            drain_sse_lines(&mut pending, &mut full_text)?;
        }

        // A final event without a trailing newline still counts.
        if !pending.is_empty() {
            pending.push(b'\n');
            drain_sse_lines(&mut pending, &mut full_text)?;
        }

        Ok(full_text.trim().to_string())
    }
}

/// Consumes every complete `data: {...}` line buffered in `pending` and
/// appends the candidate text it carries to `accumulated`. Decoding happens
/// per complete line, so a multi-byte character split across two network
/// chunks never gets mangled.
fn drain_sse_lines(pending: &mut Vec<u8>, accumulated: &mut String) -> Result<(), GeminiError> {
    while let Some(pos) = pending.iter().position(|&b| b == b'\n') {
        let line_bytes: Vec<u8> = pending.drain(..=pos).collect();
        let line = String::from_utf8_lossy(&line_bytes);
        let line = line.trim();

        let Some(data) = line.strip_prefix("data:") else {
            continue;
        };
        let data = data.trim();
        if data.is_empty() || data == "[DONE]" {
            continue;
        }

        if let Some(text) = extract_chunk_text(data)? {
            accumulated.push_str(&text);
        }
    }

    Ok(())
}

fn extract_chunk_text(data: &str) -> Result<Option<String>, GeminiError> {
    let chunk: StreamChunk =
        serde_json::from_str(data).map_err(|e| GeminiError::Stream(e.to_string()))?;

    let text: String = chunk
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .filter_map(|part| part.text)
        .collect();

    Ok((!text.is_empty()).then_some(text))
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    candidates: Vec<StreamCandidate>,
}

#[derive(Debug, Deserialize)]
struct StreamCandidate {
    content: Option<StreamContent>,
}

#[derive(Debug, Deserialize)]
struct StreamContent {
    #[serde(default)]
    parts: Vec<StreamPart>,
}

#[derive(Debug, Deserialize)]
struct StreamPart {
    text: Option<String>,
}

impl Generator for GeminiClient {
    const TEMPERATURE: f32 = 0.7;
    type Error = GeminiError;

    async fn generate(&self, prompt: &str, model: &str) -> Result<String, Self::Error> {
        self.send_generate_request(model, prompt, Self::TEMPERATURE)
            .await
            .inspect_err(|e| tracing::error!(error = %e, %model, "Failed to generate content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_from_stream_chunk() {
        let data = r#"{"candidates":[{"content":{"parts":[{"text":"Hello "},{"text":"world"}]}}]}"#;
        assert_eq!(
            extract_chunk_text(data).unwrap(),
            Some("Hello world".to_string())
        );
    }

    #[test]
    fn test_chunk_without_text_yields_none() {
        let data = r#"{"candidates":[{"content":{"parts":[]}}]}"#;
        assert_eq!(extract_chunk_text(data).unwrap(), None);

        let data = r#"{"candidates":[{"finishReason":"STOP"}]}"#;
        assert_eq!(extract_chunk_text(data).unwrap(), None);
    }

    #[test]
    fn test_malformed_chunk_is_an_error() {
        assert!(matches!(
            extract_chunk_text("{not json"),
            Err(GeminiError::Stream(_))
        ));
    }

    #[test]
    fn test_drains_only_complete_lines() {
        let mut pending =
            b"data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"A\"}]}}]}\ndata: {\"cand"
                .to_vec();
        let mut accumulated = String::new();

        drain_sse_lines(&mut pending, &mut accumulated).unwrap();

        assert_eq!(accumulated, "A");
        assert_eq!(pending, b"data: {\"cand".to_vec());
    }

    #[test]
    fn test_non_data_and_done_lines_are_skipped() {
        let mut pending = b": keep-alive\n\ndata: [DONE]\n".to_vec();
        let mut accumulated = String::new();

        drain_sse_lines(&mut pending, &mut accumulated).unwrap();

        assert!(accumulated.is_empty());
        assert!(pending.is_empty());
    }
}
