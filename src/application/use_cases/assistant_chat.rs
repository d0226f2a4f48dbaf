use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::{ChatSession, ChatTurn, Language};

const SYSTEM_PROMPT: &str = "\
You are the conversational assistant of a government citizen-services
portal. Help citizens track applications, understand scheme rules, and
prepare documents. Be brief and concrete; ask a clarifying question when
the request is ambiguous.";

const CHAT_TEMPERATURE: f32 = 0.6;
const CHAT_MAX_TOKENS: u32 = 768;

const FALLBACK_REPLY: &str = "\
Sorry, I ran into a problem answering that. Could you try again?";

/// Multi-turn assistant conversation over a [`ChatSession`].
///
/// Each request replays the session's rolling window (the last 8 prior
/// turns) plus the new user message. Both the user message and the reply
/// — including the apologetic fallback on failure — are appended to the
/// session, so the transcript always reflects what the citizen saw.
pub struct AssistantChatUseCase {
    client: Arc<dyn ChatClient>,
}

impl AssistantChatUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn send(
        &self,
        session: &mut ChatSession,
        message: &str,
        context: &str,
        language: Language,
    ) -> String {
        let mut system = SYSTEM_PROMPT.to_string();
        if !context.trim().is_empty() {
            system.push_str(&format!("\n\nPage context:\n{context}"));
        }
        if language != Language::English {
            system.push_str(&format!("\n\nRespond in {}.", language.name()));
        }

        let mut messages = session.window().to_vec();
        messages.push(ChatTurn::user(message));

        debug!(
            "Assistant chat {}: sending {} turns of context",
            session.id(),
            messages.len() - 1
        );

        let request = CompletionRequest::new(system, messages)
            .with_temperature(CHAT_TEMPERATURE)
            .with_max_tokens(CHAT_MAX_TOKENS);

        session.push(ChatTurn::user(message));

        let reply = match self.client.complete(&request).await {
            Ok(reply) => reply.trim().to_string(),
            Err(e) => {
                warn!("Assistant chat {} failed: {e}", session.id());
                FALLBACK_REPLY.to_string()
            }
        };

        session.push(ChatTurn::assistant(&reply));
        reply
    }
}
