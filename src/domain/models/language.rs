use serde::{Deserialize, Serialize};
use tracing::warn;

/// A target language supported by the portal's translation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Tamil,
    Telugu,
    French,
    German,
}

impl Language {
    /// ISO 639-1 code, used in cache keys and CLI flags.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    /// English name of the language, as written into prompts.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::French => "French",
            Language::German => "German",
        }
    }

    pub fn from_code(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "hi" | "hindi" => Language::Hindi,
            "ta" | "tamil" => Language::Tamil,
            "te" | "telugu" => Language::Telugu,
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            unknown => {
                warn!("Unknown language code '{}', defaulting to English", unknown);
                Language::English
            }
        }
    }

    pub fn all() -> &'static [Language] {
        &[
            Language::English,
            Language::Hindi,
            Language::Tamil,
            Language::Telugu,
            Language::French,
            Language::German,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_codes_and_names() {
        assert_eq!(Language::from_code("ta"), Language::Tamil);
        assert_eq!(Language::from_code("Tamil"), Language::Tamil);
        assert_eq!(Language::from_code("HI"), Language::Hindi);
    }

    #[test]
    fn test_from_code_defaults_to_english() {
        assert_eq!(Language::from_code("xx"), Language::English);
    }

    #[test]
    fn test_all_covers_supported_set() {
        assert_eq!(Language::all().len(), 6);
    }
}
