use serde::{Deserialize, Serialize};

use crate::domain::models::Language;

/// Number of leading characters of the source text that participate in the
/// cache key. Texts sharing a prefix of this length translate to the same
/// cached value.
pub const KEY_PREFIX_CHARS: usize = 100;

/// Cache key for a translation: target language plus the first
/// [`KEY_PREFIX_CHARS`] characters of the source text.
///
/// The prefix is measured in characters, not bytes, so multi-byte scripts
/// (Devanagari, Tamil, Telugu) never split a code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    language: Language,
    prefix: String,
}

impl TranslationKey {
    pub fn new(language: Language, text: &str) -> Self {
        Self {
            language,
            prefix: text.chars().take(KEY_PREFIX_CHARS).collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Flat string form used as the map key in persisted storage,
    /// e.g. `ta:Application status`.
    pub fn as_storage_key(&self) -> String {
        format!("{}:{}", self.language.code(), self.prefix)
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.language.code(), self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_keeps_full_prefix() {
        let key = TranslationKey::new(Language::Tamil, "Application approved");
        assert_eq!(key.prefix(), "Application approved");
        assert_eq!(key.as_storage_key(), "ta:Application approved");
    }

    #[test]
    fn test_long_text_truncates_at_prefix_chars() {
        let text = "x".repeat(250);
        let key = TranslationKey::new(Language::Hindi, &text);
        assert_eq!(key.prefix().chars().count(), KEY_PREFIX_CHARS);
    }

    #[test]
    fn test_prefix_counts_characters_not_bytes() {
        // 120 Devanagari characters, each 3 bytes in UTF-8.
        let text = "न".repeat(120);
        let key = TranslationKey::new(Language::Hindi, &text);
        assert_eq!(key.prefix().chars().count(), KEY_PREFIX_CHARS);
    }

    #[test]
    fn test_same_prefix_same_key() {
        let base = "a".repeat(KEY_PREFIX_CHARS);
        let longer = format!("{base} and a different tail");
        let k1 = TranslationKey::new(Language::French, &base);
        let k2 = TranslationKey::new(Language::French, &longer);
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_language_distinguishes_keys() {
        let k1 = TranslationKey::new(Language::Tamil, "hello");
        let k2 = TranslationKey::new(Language::Telugu, "hello");
        assert_ne!(k1, k2);
    }
}
