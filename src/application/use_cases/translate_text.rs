use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::application::{ChatClient, CompletionRequest, TranslationCache};
use crate::domain::{ChatTurn, Language, TranslationKey};

/// System prompt instructing the model to behave as a plain translation
/// endpoint: translated text only, no commentary.
const SYSTEM_PROMPT: &str = "\
You are the translation service of a government citizen-services portal.

Rules:
1. Return ONLY the translated text — no preamble, no notes, no quotes.
2. Keep proper nouns, scheme names, reference numbers, and dates unchanged.
3. Use the formal register appropriate for official communication.
4. Preserve line breaks of the input.";

const TRANSLATION_TEMPERATURE: f32 = 0.2;
const TRANSLATION_MAX_TOKENS: u32 = 1024;

/// Translates portal strings with persistent memoization.
///
/// The contract is infallible: every failure — transport, empty response,
/// storage — is logged and the original text is returned. Callers never
/// need to handle a translation error.
pub struct TranslateTextUseCase {
    client: Arc<dyn ChatClient>,
    cache: Arc<dyn TranslationCache>,
}

impl TranslateTextUseCase {
    pub fn new(client: Arc<dyn ChatClient>, cache: Arc<dyn TranslationCache>) -> Self {
        Self { client, cache }
    }

    /// Translate `text` into `language`, consulting the cache first.
    ///
    /// A cache hit returns immediately with no network call. A miss calls
    /// the completion endpoint and stores the trimmed result under the
    /// `(language, 100-char prefix)` key.
    pub async fn translate(&self, text: &str, language: Language) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        // Portal source strings are authored in English; an English target
        // needs no round trip.
        if language == Language::English {
            return text.to_string();
        }

        let key = TranslationKey::new(language, text);

        match self.cache.get(&key).await {
            Ok(Some(cached)) => {
                debug!("Translation cache hit for {}", key);
                return cached;
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Translation cache read failed for {}: {e}", key);
            }
        }

        let prompt = format!(
            "Translate the following text into {}:\n\n{}",
            language.name(),
            text
        );
        let request = CompletionRequest::new(SYSTEM_PROMPT, vec![ChatTurn::user(prompt)])
            .with_temperature(TRANSLATION_TEMPERATURE)
            .with_max_tokens(TRANSLATION_MAX_TOKENS);

        let translated = match self.client.complete(&request).await {
            Ok(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    warn!("Empty translation for {}; returning original text", key);
                    return text.to_string();
                }
                trimmed
            }
            Err(e) => {
                warn!("Translation failed for {}: {e}. Returning original text.", key);
                return text.to_string();
            }
        };

        if let Err(e) = self.cache.put(&key, &translated).await {
            warn!("Failed to cache translation for {}: {e}", key);
        }

        translated
    }

    /// Translate a batch concurrently. Order of results matches the input;
    /// each element falls back independently.
    pub async fn translate_many(&self, texts: &[String], language: Language) -> Vec<String> {
        join_all(texts.iter().map(|text| self.translate(text, language))).await
    }
}
