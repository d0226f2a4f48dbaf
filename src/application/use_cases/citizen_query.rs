use std::sync::Arc;

use tracing::warn;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::{ChatTurn, Language};

const SYSTEM_PROMPT: &str = "\
You are a helpful assistant on a government citizen-services portal.
Answer questions about schemes, eligibility, required documents, and
application steps in plain language a first-time applicant can follow.
If you are not sure, say so and point the citizen to the nearest
Common Service Centre instead of guessing.";

/// Higher temperature than the verification paths: answers should read
/// naturally, not like a form letter.
const QUERY_TEMPERATURE: f32 = 0.7;
const QUERY_MAX_TOKENS: u32 = 768;

const FALLBACK_ANSWER: &str = "\
Sorry, I could not process your question right now. Please try again in a \
few minutes, or contact your nearest Common Service Centre for help.";

/// Answers a one-off citizen question, optionally grounded in page
/// context. Failures collapse to a fixed apologetic answer.
pub struct CitizenQueryUseCase {
    client: Arc<dyn ChatClient>,
}

impl CitizenQueryUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, query: &str, context: &str, language: Language) -> String {
        let mut prompt = String::new();
        if !context.trim().is_empty() {
            prompt.push_str(&format!("Context:\n{context}\n\n"));
        }
        prompt.push_str(&format!("Question: {query}"));
        if language != Language::English {
            prompt.push_str(&format!("\n\nAnswer in {}.", language.name()));
        }

        let request = CompletionRequest::new(SYSTEM_PROMPT, vec![ChatTurn::user(prompt)])
            .with_temperature(QUERY_TEMPERATURE)
            .with_max_tokens(QUERY_MAX_TOKENS);

        match self.client.complete(&request).await {
            Ok(answer) => answer.trim().to_string(),
            Err(e) => {
                warn!("Citizen query failed: {e}");
                FALLBACK_ANSWER.to_string()
            }
        }
    }
}
