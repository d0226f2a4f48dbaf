//! In-memory translation cache.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::TranslationCache;
use crate::connector::storage::bounded::BoundedStore;
use crate::connector::storage::DEFAULT_CACHE_CAPACITY;
use crate::domain::{DomainError, TranslationKey};

/// Bounded in-memory [`TranslationCache`] for tests and `--mock` runs.
pub struct InMemoryTranslationCache {
    entries: Mutex<BoundedStore>,
}

impl InMemoryTranslationCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(BoundedStore::new(capacity)),
        }
    }
}

impl Default for InMemoryTranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationCache for InMemoryTranslationCache {
    async fn get(&self, key: &TranslationKey) -> Result<Option<String>, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(&key.as_storage_key()))
    }

    async fn put(&self, key: &TranslationKey, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.as_storage_key(), value.to_string());
        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries.len())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        Ok(())
    }
}
