use async_trait::async_trait;

use crate::domain::{ChatTurn, DomainError};

/// A chat-completion request: system context, prior turns, and sampling
/// parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    system: String,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(system: impl Into<String>, messages: Vec<ChatTurn>) -> Self {
        Self {
            system: system.into(),
            messages,
            temperature: 0.3,
            max_tokens: 1024,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn messages(&self) -> &[ChatTurn] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// An interface for sending chat-style prompts to an LLM and receiving
/// text responses.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (the use cases) remain decoupled from any
/// particular provider or HTTP client library.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the request and return the first candidate's text, trimmed.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;

    /// Identifier of the model answering requests, surfaced in reports.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder_overrides_sampling() {
        let request = CompletionRequest::new("system", vec![ChatTurn::user("hi")])
            .with_temperature(0.7)
            .with_max_tokens(256);
        assert_eq!(request.temperature(), 0.7);
        assert_eq!(request.max_tokens(), 256);
        assert_eq!(request.messages().len(), 1);
    }
}
