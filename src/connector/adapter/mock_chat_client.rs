use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::DomainError;

const MOCK_MODEL_NAME: &str = "mock-chat";

/// A scripted [`ChatClient`] for tests and offline (`--mock`) runs.
///
/// Queued responses are returned in order; once the queue is empty the
/// default response repeats. `failing()` makes every call error, and the
/// call counter lets tests assert that a cache hit skipped the network.
pub struct MockChatClient {
    responses: Mutex<VecDeque<String>>,
    default_response: String,
    fail: bool,
    calls: AtomicUsize,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            default_response: "This is a mock response.".to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the default response returned when the queue is empty.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.default_response = response.into();
        self
    }

    /// Queue responses to return one per call, in order.
    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().expect("mock lock poisoned") = responses.into();
        self
    }

    /// Make every call fail with a completion error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Number of `complete` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(DomainError::completion("mock client configured to fail"));
        }

        let mut queue = self.responses.lock().expect("mock lock poisoned");
        Ok(queue
            .pop_front()
            .unwrap_or_else(|| self.default_response.clone()))
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChatTurn;

    fn request() -> CompletionRequest {
        CompletionRequest::new("system", vec![ChatTurn::user("hello")])
    }

    #[tokio::test]
    async fn test_counts_calls_and_replays_queue() {
        let client = MockChatClient::new()
            .with_responses(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(client.complete(&request()).await.unwrap(), "first");
        assert_eq!(client.complete(&request()).await.unwrap(), "second");
        assert_eq!(client.complete(&request()).await.unwrap(), "This is a mock response.");
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failing_client_errors_every_call() {
        let client = MockChatClient::failing();
        let err = client.complete(&request()).await.unwrap_err();
        assert!(err.is_completion_error());
        assert_eq!(client.call_count(), 1);
    }
}
