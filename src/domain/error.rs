use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Completion error: {0}")]
    CompletionError(String),

    #[error("Translation error: {0}")]
    TranslationError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::CompletionError(msg.into())
    }

    pub fn translation(msg: impl Into<String>) -> Self {
        Self::TranslationError(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_completion_error(&self) -> bool {
        matches!(self, Self::CompletionError(_))
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }

    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}
