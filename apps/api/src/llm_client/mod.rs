//! Anthropic Messages client used by resume Q&A.
//!
//! Transient failures (transport errors, 429, 5xx) are retried with
//! exponential backoff; any other non-success status fails immediately.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;
const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 1000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM client is not configured (ANTHROPIC_API_KEY unset)")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("gave up after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: TokenUsage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenUsage {
    input_tokens: u32,
    output_tokens: u32,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl MessagesResponse {
    /// Trimmed text of the first text block, if any.
    fn first_text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .find_map(|block| block.text.as_deref())
            .map(str::trim)
    }
}

/// Outcome of a single HTTP attempt.
enum Attempt {
    Done(MessagesResponse),
    Retry(LlmError),
}

fn is_transient(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BASE_BACKOFF_MS << (attempt - 1))
}

#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
}

impl LlmClient {
    /// Without an API key every call fails with `LlmError::NotConfigured`.
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one user message and returns the trimmed reply text.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = None;
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = backoff(attempt);
                warn!("Retrying LLM call in {}ms (attempt {})", delay.as_millis(), attempt + 1);
                tokio::time::sleep(delay).await;
            }

            match self.send_once(api_key, &request).await? {
                Attempt::Done(response) => {
                    debug!(
                        "LLM usage: {} input / {} output tokens",
                        response.usage.input_tokens, response.usage.output_tokens
                    );
                    return match response.first_text() {
                        Some(text) if !text.is_empty() => Ok(text.to_string()),
                        _ => Err(LlmError::EmptyContent),
                    };
                }
                Attempt::Retry(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }

    /// `Err` means a permanent failure; transient ones come back as `Attempt::Retry`.
    async fn send_once(
        &self,
        api_key: &str,
        request: &MessagesRequest<'_>,
    ) -> Result<Attempt, LlmError> {
        let response = match self
            .http
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(Attempt::Retry(LlmError::Http(e))),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(Attempt::Done(response.json().await?));
        }

        let body = response.text().await.unwrap_or_default();
        let error = LlmError::Api {
            status: status.as_u16(),
            message: api_error_message(body),
        };
        if is_transient(status) {
            warn!("LLM API returned {status}");
            Ok(Attempt::Retry(error))
        } else {
            Err(error)
        }
    }
}

/// Prefers the `error.message` field of an Anthropic error body over the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.error.message)
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text_skips_non_text_blocks() {
        let json = r#"{
            "content": [
                {"type": "tool_use", "text": null},
                {"type": "text", "text": "  ANSWER: yes \n"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 3}
        }"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("ANSWER: yes"));
    }

    #[test]
    fn test_first_text_without_text_block() {
        let json = r#"{"content": [], "usage": {"input_tokens": 1, "output_tokens": 0}}"#;
        let response: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn test_api_error_message_prefers_structured_body() {
        let body = r#"{"type":"error","error":{"type":"invalid_request_error","message":"bad model"}}"#;
        assert_eq!(api_error_message(body.to_string()), "bad model");
        assert_eq!(api_error_message("upstream down".to_string()), "upstream down");
    }

    #[test]
    fn test_retry_policy() {
        assert!(is_transient(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_transient(StatusCode::BAD_GATEWAY));
        assert!(!is_transient(StatusCode::BAD_REQUEST));
        assert_eq!(backoff(1), Duration::from_millis(1000));
        assert_eq!(backoff(2), Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = LlmClient::new(None).unwrap();
        assert!(!client.is_configured());
        let err = client.call_text("hi", "system").await.unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured));
    }
}
