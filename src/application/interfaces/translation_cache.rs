use async_trait::async_trait;

use crate::domain::{DomainError, TranslationKey};

/// Persistent memoization of `(language, text prefix)` -> translation.
///
/// Implementations are bounded: inserting past capacity evicts the
/// least-recently-inserted entry, so storage never grows without limit.
/// Entries are never invalidated otherwise — a stored translation is
/// returned verbatim for the lifetime of the entry.
#[async_trait]
pub trait TranslationCache: Send + Sync {
    async fn get(&self, key: &TranslationKey) -> Result<Option<String>, DomainError>;

    /// Stores a translation, evicting the oldest entry when full.
    async fn put(&self, key: &TranslationKey, value: &str) -> Result<(), DomainError>;

    async fn len(&self) -> Result<usize, DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;
}
