use std::collections::{HashMap, VecDeque};

/// Default entry bound for translation caches.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Insertion-ordered bounded map backing both cache adapters.
///
/// Eviction policy: least-recently-inserted. When the store is full, the
/// oldest entry is dropped to make room; re-inserting an existing key
/// refreshes its position. The bound is a hard invariant — `len()` never
/// exceeds the capacity.
pub(crate) struct BoundedStore {
    capacity: usize,
    entries: HashMap<String, String>,
    order: VecDeque<String>,
}

impl BoundedStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Rebuild from persisted entries, oldest first. Entries beyond the
    /// capacity are dropped from the old end.
    pub fn from_entries(entries: Vec<(String, String)>, capacity: usize) -> Self {
        let mut store = Self::new(capacity);
        for (key, value) in entries {
            store.insert(key, value);
        }
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Insert, returning the evicted key when the bound forced one out.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        if self.entries.contains_key(&key) {
            self.order.retain(|k| k != &key);
            self.order.push_back(key.clone());
            self.entries.insert(key, value);
            return None;
        }

        let evicted = if self.entries.len() >= self.capacity {
            self.order.pop_front().map(|oldest| {
                self.entries.remove(&oldest);
                oldest
            })
        } else {
            None
        };

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Entries in insertion order, oldest first, for persistence.
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|v| (key.clone(), v.clone())))
            .collect()
    }
}
