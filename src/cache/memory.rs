use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::{TrieCache, DEFAULT_CACHE_KEY};
use crate::matcher::TrieSnapshot;

type Store = Arc<Mutex<HashMap<String, TrieSnapshot>>>;

/// Store shared by every default-constructed memory cache in the process
static GLOBAL_STORE: Lazy<Store> = Lazy::new(Store::default);

/// In-memory trie cache.
///
/// `MemoryTrieCache::default()` uses a process-wide store, so engines
/// configured with the same key share one cached trie. `isolated()` gives a
/// private store, mostly for tests.
#[derive(Debug, Clone)]
pub struct MemoryTrieCache {
    key: String,
    store: Store,
}

impl MemoryTrieCache {
    /// Create a cache over the process-wide store
    pub fn new() -> Self {
        Self {
            key: DEFAULT_CACHE_KEY.to_string(),
            store: Arc::clone(&GLOBAL_STORE),
        }
    }

    /// Create a cache with its own private store
    pub fn isolated() -> Self {
        Self {
            key: DEFAULT_CACHE_KEY.to_string(),
            store: Store::default(),
        }
    }

    /// Current key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for MemoryTrieCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieCache for MemoryTrieCache {
    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }

    fn get(&self) -> Option<TrieSnapshot> {
        self.store.lock().get(&self.key).cloned()
    }

    fn set(&self, snapshot: &TrieSnapshot) -> bool {
        self.store.lock().insert(self.key.clone(), snapshot.clone());
        true
    }

    fn clear(&self) -> bool {
        self.store.lock().remove(&self.key);
        true
    }
}
