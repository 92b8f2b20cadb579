//! Thread-safe engine handle.
//!
//! Scans run concurrently under a read lock; word list and cache mutations
//! take the write lock, so no scan ever observes a half-updated trie.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cache::CacheStatus;
use crate::config::SensitiveConfig;
use crate::error::Result;
use crate::sensitive::Sensitive;

/// Cloneable, lock-guarded handle to a [`Sensitive`] engine
#[derive(Debug, Clone)]
pub struct SharedSensitive {
    inner: Arc<RwLock<Sensitive>>,
}

impl SharedSensitive {
    /// Build an engine from configuration and wrap it
    pub fn new(config: SensitiveConfig) -> Result<Self> {
        Ok(Self::from(Sensitive::new(config)?))
    }

    pub fn search(&self, text: &str) -> Vec<String> {
        self.inner
            .read()
            .search(text)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn filter(&self, text: &str) -> String {
        self.inner.read().filter(text).into_owned()
    }

    pub fn is_sensitive(&self, text: &str) -> bool {
        self.inner.read().is_sensitive(text)
    }

    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().add_words(words);
    }

    pub fn add_words_from_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.write().add_words_from_file(path)?;
        Ok(())
    }

    pub fn empty_trie(&self) {
        self.inner.write().empty_trie();
    }

    pub fn reset_trie(&self) -> Result<()> {
        self.inner.write().reset_trie()?;
        Ok(())
    }

    pub fn set_replace_code(&self, replace_code: impl Into<String>) {
        self.inner.write().set_replace_code(replace_code);
    }

    pub fn set_disturbs(&self, disturbs: impl IntoIterator<Item = char>) {
        self.inner.write().set_disturbs(disturbs);
    }

    pub fn save_trie(&self) -> Result<CacheStatus> {
        self.inner.read().save_trie()
    }

    pub fn clear_cache(&self) -> Result<CacheStatus> {
        self.inner.read().clear_cache()
    }

    pub fn rebuild_cache(&self) -> Result<CacheStatus> {
        self.inner.write().rebuild_cache()
    }

    /// Lock the engine for reading
    pub fn read(&self) -> RwLockReadGuard<'_, Sensitive> {
        self.inner.read()
    }

    /// Lock the engine for writing
    pub fn write(&self) -> RwLockWriteGuard<'_, Sensitive> {
        self.inner.write()
    }
}

impl From<Sensitive> for SharedSensitive {
    fn from(sensitive: Sensitive) -> Self {
        Self {
            inner: Arc::new(RwLock::new(sensitive)),
        }
    }
}
