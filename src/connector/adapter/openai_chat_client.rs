use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionRequest};
use crate::connector::adapter::RetryPolicy;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible chat-completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
///
/// Implements [`ChatClient`] so the use cases stay decoupled from
/// transport and serialization details.
///
/// **Fail-closed configuration**: [`OpenAiChatClient::from_env`] refuses to
/// construct a client without `SEVAMITRA_API_KEY` — there is no embedded
/// fallback credential. `SEVAMITRA_BASE_URL` and `SEVAMITRA_MODEL` are
/// optional overrides:
///
/// ```text
/// SEVAMITRA_API_KEY=sk-...
/// SEVAMITRA_BASE_URL=https://api.openai.com
/// SEVAMITRA_MODEL=gpt-4o-mini
/// ```
///
/// Transient failures (transport errors, HTTP 429/5xx) are retried per
/// the configured [`RetryPolicy`]; other failures return immediately.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
    retry: RetryPolicy,
}

impl OpenAiChatClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Construct from environment variables, failing closed:
    ///
    /// | Variable             | Default                   | Purpose            |
    /// |----------------------|---------------------------|--------------------|
    /// | `SEVAMITRA_API_KEY`  | — (required)              | Bearer credential  |
    /// | `SEVAMITRA_BASE_URL` | `https://api.openai.com`  | Compatible server  |
    /// | `SEVAMITRA_MODEL`    | `gpt-4o-mini`             | Model identifier   |
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("SEVAMITRA_API_KEY").map_err(|_| {
            DomainError::config(
                "SEVAMITRA_API_KEY is not set; refusing to call the completion API without a credential",
            )
        })?;
        let base = std::env::var("SEVAMITRA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("SEVAMITRA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(key, model, base))
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<String, AttemptError> {
        let mut messages = vec![ApiMessage {
            role: "system",
            content: request.system(),
        }];
        messages.extend(request.messages().iter().map(|turn| ApiMessage {
            role: turn.role.as_str(),
            content: &turn.content,
        }));

        let payload = ApiRequest {
            model: &self.model,
            messages,
            temperature: request.temperature(),
            max_tokens: request.max_tokens(),
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AttemptError {
                retryable: true,
                error: DomainError::completion(format!("request failed: {e}")),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AttemptError {
                retryable: retryable_status(status),
                error: DomainError::completion(format!("API returned {status}: {body}")),
            });
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| AttemptError {
            retryable: false,
            error: DomainError::parse(format!("failed to deserialize API response: {e}")),
        })?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(AttemptError {
                retryable: false,
                error: DomainError::completion("response contained no candidate text"),
            });
        }

        Ok(content)
    }
}

struct AttemptError {
    retryable: bool,
    error: DomainError,
}

/// 429 and server errors are worth retrying; other client errors are not.
fn retryable_status(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let mut attempt = 0;
        loop {
            match self.attempt(request).await {
                Ok(content) => {
                    debug!("Completion succeeded on attempt {}", attempt + 1);
                    return Ok(content);
                }
                Err(AttemptError { retryable, error }) => {
                    attempt += 1;
                    if !retryable || attempt >= self.retry.max_attempts() {
                        return Err(error);
                    }
                    let delay = self.retry.delay_for(attempt - 1);
                    warn!(
                        "Completion attempt {attempt} failed: {error}. Retrying in {:?}.",
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_statuses() {
        assert!(retryable_status(reqwest::StatusCode::TOO_MANY_REQUESTS));
        assert!(retryable_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(retryable_status(reqwest::StatusCode::BAD_GATEWAY));
        assert!(!retryable_status(reqwest::StatusCode::BAD_REQUEST));
        assert!(!retryable_status(reqwest::StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = OpenAiChatClient::new("key", "model", "http://localhost:1234/");
        assert_eq!(client.url, "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn test_model_name_is_exposed() {
        let client = OpenAiChatClient::new("key", "test-model", DEFAULT_BASE_URL);
        assert_eq!(client.model_name(), "test-model");
    }
}
