//! Trie cache backends.
//!
//! A cache lets an engine skip word list loading on startup by restoring a
//! previously stored [`TrieSnapshot`]. Backends only ever see snapshot
//! values, never the live trie.

mod file;
mod memory;
mod registry;

pub use file::FileTrieCache;
pub use memory::MemoryTrieCache;
pub use registry::{CacheRegistry, DEFAULT_CACHE_CLASS};

use crate::matcher::TrieSnapshot;

/// Key used when the configuration does not name one
pub const DEFAULT_CACHE_KEY: &str = "sensitive_word_filter::Sensitive";

/// Trait for persisting trie snapshots
pub trait TrieCache: Send + Sync {
    /// Select the entry this cache reads and writes
    fn set_key(&mut self, key: &str);

    /// Load the stored snapshot, if any
    fn get(&self) -> Option<TrieSnapshot>;

    /// Store a snapshot, returning whether it was persisted
    fn set(&self, snapshot: &TrieSnapshot) -> bool;

    /// Drop the stored snapshot, returning whether the backend succeeded
    fn clear(&self) -> bool;
}

/// Outcome of a cache save or clear on the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The backend accepted the operation
    Done,
    /// Caching is turned off; nothing happened
    Disabled,
}

impl CacheStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, CacheStatus::Done)
    }
}

/// Nil cache - holds nothing and refuses every write
#[derive(Debug, Clone, Copy, Default)]
pub struct NilTrieCache;

impl TrieCache for NilTrieCache {
    fn set_key(&mut self, _key: &str) {}

    fn get(&self) -> Option<TrieSnapshot> {
        None
    }

    fn set(&self, _snapshot: &TrieSnapshot) -> bool {
        false
    }

    fn clear(&self) -> bool {
        false
    }
}
