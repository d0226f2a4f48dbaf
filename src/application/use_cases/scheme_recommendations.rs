use std::sync::Arc;

use tracing::warn;

use crate::application::{ChatClient, CompletionRequest};
use crate::domain::{ChatTurn, CitizenProfile, Language};

const SYSTEM_PROMPT: &str = "\
You are a benefits advisor on a government citizen-services portal.
Given a citizen's profile, list the welfare schemes they are likely
eligible for, one per line, each with a one-sentence reason and the key
document needed to apply. List the most relevant schemes first and do
not invent scheme names.";

const RECOMMENDATION_TEMPERATURE: f32 = 0.5;
const RECOMMENDATION_MAX_TOKENS: u32 = 768;

const FALLBACK_RECOMMENDATION: &str = "\
Scheme suggestions are unavailable right now. Please browse the scheme \
directory, or visit your nearest Common Service Centre for guidance.";

/// Suggests schemes for a citizen profile. Failures collapse to a fixed
/// fallback pointing at the scheme directory.
pub struct SchemeRecommendationsUseCase {
    client: Arc<dyn ChatClient>,
}

impl SchemeRecommendationsUseCase {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, profile: &CitizenProfile, language: Language) -> String {
        let mut prompt = format!("Citizen profile:\n{}", profile.prompt_block());
        if language != Language::English {
            prompt.push_str(&format!("\n\nRespond in {}.", language.name()));
        }

        let request = CompletionRequest::new(SYSTEM_PROMPT, vec![ChatTurn::user(prompt)])
            .with_temperature(RECOMMENDATION_TEMPERATURE)
            .with_max_tokens(RECOMMENDATION_MAX_TOKENS);

        match self.client.complete(&request).await {
            Ok(recommendations) => recommendations.trim().to_string(),
            Err(e) => {
                warn!("Scheme recommendation failed: {e}");
                FALLBACK_RECOMMENDATION.to_string()
            }
        }
    }
}
