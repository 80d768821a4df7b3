//! LLM client — the only module that talks to the Anthropic Messages API.
//!
//! Analyzers and the resume writer go through `LlmClient`; when no API key is
//! configured the client is never constructed and callers use their local fallback.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
/// Model used for every call.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesReply {
    content: Vec<ReplyBlock>,
    #[serde(default)]
    usage: Option<ReplyUsage>,
}

#[derive(Debug, Deserialize)]
struct ReplyBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl MessagesReply {
    /// Trimmed text of the first text block, if it has any content.
    fn into_text(self) -> Option<String> {
        self.content
            .into_iter()
            .filter(|b| b.kind == "text")
            .find_map(|b| b.text)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// What one HTTP attempt produced.
enum Attempt {
    Done(MessagesReply),
    /// 429, 5xx or a transport failure; worth another try.
    Retry(LlmError),
}

/// Delay before attempt `attempt` (1-based retries): 1s, 2s, 4s ...
fn backoff_delay(attempt: u32) -> Duration {
    BASE_BACKOFF * 2u32.saturating_pow(attempt.saturating_sub(1))
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Anthropic Messages API client with retry and text/JSON helpers.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient").field("model", &MODEL).finish_non_exhaustive()
    }
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, api_key })
    }

    /// Returns the trimmed reply text. Empty replies are an error.
    pub async fn call_text(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        self.complete(prompt, system).await
    }

    /// Parses the reply as JSON, tolerating a surrounding code fence.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.complete(prompt, system).await?;
        Ok(serde_json::from_str(strip_json_fences(&text))?)
    }

    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let request = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [UserMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut attempt = 0;
        loop {
            match self.send_once(&request).await? {
                Attempt::Done(reply) => {
                    if let Some(usage) = &reply.usage {
                        debug!(
                            input_tokens = usage.input_tokens,
                            output_tokens = usage.output_tokens,
                            "LLM call succeeded"
                        );
                    }
                    return reply.into_text().ok_or(LlmError::EmptyContent);
                }
                Attempt::Retry(err) => {
                    attempt += 1;
                    if attempt >= MAX_ATTEMPTS {
                        return Err(err);
                    }
                    let delay = backoff_delay(attempt);
                    warn!(attempt, delay_ms = delay.as_millis() as u64, "LLM call failed, retrying: {err}");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// One HTTP round trip. Non-retryable failures come back as `Err`.
    async fn send_once(&self, request: &MessagesRequest<'_>) -> Result<Attempt, LlmError> {
        let response = match self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
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
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        let err = LlmError::Api {
            status: status.as_u16(),
            message,
        };
        if is_retryable(status) {
            Ok(Attempt::Retry(err))
        } else {
            Err(err)
        }
    }
}

/// Strips a ```json ... ``` or ``` ... ``` fence around model output.
pub(crate) fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest).trim_start();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_json_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_json_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_json_fences("  {\"a\": 1} "), "{\"a\": 1}");
        assert_eq!(strip_json_fences("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_reply_text_skips_non_text_blocks() {
        let reply: MessagesReply = serde_json::from_value(serde_json::json!({
            "content": [
                { "type": "tool_use" },
                { "type": "text", "text": "  hello \n" }
            ],
            "usage": { "input_tokens": 3, "output_tokens": 1 }
        }))
        .unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_blank_reply_has_no_text() {
        let reply: MessagesReply = serde_json::from_value(serde_json::json!({
            "content": [{ "type": "text", "text": "   " }]
        }))
        .unwrap();
        assert!(reply.into_text().is_none());
    }

    #[test]
    fn test_backoff_doubles() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::UNAUTHORIZED));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_client_builds_without_network() {
        let client = LlmClient::new("test-key".to_string()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains(MODEL));
        assert!(!debug.contains("test-key"));
    }
}
