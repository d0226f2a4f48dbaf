//! Translation cache persisted as a single JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::TranslationCache;
use crate::connector::storage::bounded::BoundedStore;
use crate::connector::storage::DEFAULT_CACHE_CAPACITY;
use crate::domain::{DomainError, TranslationKey};

/// File name of the cache blob inside the data directory.
pub const CACHE_FILE_NAME: &str = "translations.json";

/// One persisted cache entry. Kept as an ordered array rather than an
/// object so eviction order survives a reload.
#[derive(Serialize, Deserialize)]
struct CacheEntry {
    key: String,
    value: String,
}

/// A [`TranslationCache`] that persists the whole mapping as one JSON
/// blob, rewritten on every successful `put`.
///
/// A missing file starts an empty cache; an unreadable or corrupt file is
/// logged and discarded — cached translations are always reproducible, so
/// losing the blob costs a round of API calls, nothing more.
pub struct JsonFileTranslationCache {
    path: PathBuf,
    entries: Mutex<BoundedStore>,
}

impl JsonFileTranslationCache {
    /// Open (or create) the cache at an explicit file path.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self, DomainError> {
        let path = path.into();
        let store = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<CacheEntry>>(&contents) {
                Ok(entries) => {
                    debug!("Loaded {} cached translations from {:?}", entries.len(), path);
                    BoundedStore::from_entries(
                        entries.into_iter().map(|e| (e.key, e.value)).collect(),
                        capacity,
                    )
                }
                Err(e) => {
                    warn!("Translation cache at {:?} is corrupt ({e}); starting empty", path);
                    BoundedStore::new(capacity)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BoundedStore::new(capacity),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read translation cache {:?}: {e}",
                    path
                )));
            }
        };

        Ok(Self {
            path,
            entries: Mutex::new(store),
        })
    }

    /// Open the cache at its standard location inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        Self::open(data_dir.as_ref().join(CACHE_FILE_NAME), DEFAULT_CACHE_CAPACITY)
    }

    fn persist(&self, store: &BoundedStore) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainError::storage(format!("failed to create cache directory: {e}"))
            })?;
        }

        let entries: Vec<CacheEntry> = store
            .snapshot()
            .into_iter()
            .map(|(key, value)| CacheEntry { key, value })
            .collect();
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| DomainError::storage(format!("failed to serialize cache: {e}")))?;

        std::fs::write(&self.path, json).map_err(|e| {
            DomainError::storage(format!("failed to write cache {:?}: {e}", self.path))
        })
    }
}

#[async_trait]
impl TranslationCache for JsonFileTranslationCache {
    async fn get(&self, key: &TranslationKey) -> Result<Option<String>, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries.get(&key.as_storage_key()))
    }

    async fn put(&self, key: &TranslationKey, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        if let Some(evicted) = entries.insert(key.as_storage_key(), value.to_string()) {
            debug!("Translation cache full; evicted '{evicted}'");
        }
        self.persist(&entries)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        let entries = self.entries.lock().await;
        Ok(entries.len())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.persist(&entries)
    }
}
