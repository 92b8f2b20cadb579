//! Sensitive word engine.
//!
//! Owns the word trie together with the matching configuration, and keeps the
//! trie in sync with an optional cache backend.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use log::{debug, info};

use crate::cache::{CacheRegistry, CacheStatus, TrieCache, DEFAULT_CACHE_CLASS, DEFAULT_CACHE_KEY};
use crate::config::SensitiveConfig;
use crate::error::{CacheErrorKind, Result, SensitiveError};
use crate::loader::FileWordSource;
use crate::matcher::{redact, DisturbSet, MatchSpan, Scanner, WordTrie, DEFAULT_REPLACE_CODE};

/// Sensitive word detection and redaction engine
pub struct Sensitive {
    config: SensitiveConfig,
    replace_code: String,
    disturbs: DisturbSet,
    trie: WordTrie,
    cache: Option<Box<dyn TrieCache>>,
}

impl Sensitive {
    /// Create an engine, resolving the cache class against the built-in
    /// registry.
    pub fn new(config: SensitiveConfig) -> Result<Self> {
        Self::with_registry(config, &CacheRegistry::new())
    }

    /// Create an engine, resolving the cache class against `registry`.
    ///
    /// With caching enabled, a non-empty trie found in the cache is adopted
    /// as is and the configured words and files are not read. Otherwise the trie is
    /// built from configuration and, with caching enabled, stored right away.
    pub fn with_registry(config: SensitiveConfig, registry: &CacheRegistry) -> Result<Self> {
        let cache = if config.cache {
            let class = config.cache_class.as_deref().unwrap_or(DEFAULT_CACHE_CLASS);
            Some(registry.resolve(class)?)
        } else {
            None
        };
        Self::build(config, cache)
    }

    /// Create an engine using an already constructed cache backend.
    ///
    /// The backend is used regardless of `config.cache` and
    /// `config.cache_class`.
    pub fn with_cache(mut config: SensitiveConfig, cache: Box<dyn TrieCache>) -> Result<Self> {
        config.cache = true;
        Self::build(config, Some(cache))
    }

    fn build(config: SensitiveConfig, mut cache: Option<Box<dyn TrieCache>>) -> Result<Self> {
        let replace_code = config
            .replace_code
            .clone()
            .unwrap_or_else(|| DEFAULT_REPLACE_CODE.to_string());
        let disturbs = config.disturbs.iter().flatten().copied().collect();

        if let Some(cache) = cache.as_mut() {
            cache.set_key(config.cache_key.as_deref().unwrap_or(DEFAULT_CACHE_KEY));
        }

        let mut sensitive = Self {
            config,
            replace_code,
            disturbs,
            trie: WordTrie::new(),
            cache,
        };

        // An empty cached trie counts as a miss and is rebuilt from configuration.
        let cached = sensitive
            .cache
            .as_ref()
            .and_then(|cache| cache.get())
            .filter(|snapshot| !snapshot.is_empty());
        if let Some(snapshot) = cached {
            debug!("Restored {} sensitive words from cache", snapshot.word_count());
            sensitive.trie.restore(snapshot);
            return Ok(sensitive);
        }

        sensitive.reset_trie()?;
        sensitive.save_trie()?;
        Ok(sensitive)
    }

    /// Set the replacement unit
    pub fn set_replace_code(&mut self, replace_code: impl Into<String>) -> &mut Self {
        self.replace_code = replace_code.into();
        self
    }

    /// Replace the disturb characters
    pub fn set_disturbs(&mut self, disturbs: impl IntoIterator<Item = char>) -> &mut Self {
        self.disturbs = disturbs.into_iter().collect();
        self
    }

    /// Store the current trie in the cache
    pub fn save_trie(&self) -> Result<CacheStatus> {
        let Some(cache) = self.cache.as_ref() else {
            return Ok(CacheStatus::Disabled);
        };

        if !cache.set(&self.trie.snapshot()) {
            return Err(SensitiveError::cache(
                CacheErrorKind::SaveFailed,
                "save cache failed",
            ));
        }

        info!("Cached {} sensitive words", self.trie.len());
        Ok(CacheStatus::Done)
    }

    /// Rebuild the trie from the configured words and files.
    ///
    /// Words come first, then every file in order. A file that cannot be
    /// read aborts the rebuild; words inserted before it are kept.
    pub fn reset_trie(&mut self) -> Result<&mut Self> {
        self.empty_trie();

        if let Some(words) = self.config.words.as_ref() {
            self.trie.extend(words);
        }

        for path in &self.config.files {
            load_file(&mut self.trie, path)?;
        }

        debug!("Built trie with {} sensitive words", self.trie.len());
        Ok(self)
    }

    /// Forget every sensitive word. The cache is left untouched.
    pub fn empty_trie(&mut self) -> &mut Self {
        self.trie.clear();
        self
    }

    /// Drop the cached trie
    pub fn clear_cache(&self) -> Result<CacheStatus> {
        let Some(cache) = self.cache.as_ref() else {
            return Ok(CacheStatus::Disabled);
        };

        if !cache.clear() {
            return Err(SensitiveError::cache(
                CacheErrorKind::ClearFailed,
                "clear cache failed",
            ));
        }

        info!("Cleared sensitive word cache");
        Ok(CacheStatus::Done)
    }

    /// Rebuild the trie from configuration and store it in the cache
    pub fn rebuild_cache(&mut self) -> Result<CacheStatus> {
        self.reset_trie()?;
        self.save_trie()
    }

    /// Add sensitive words
    pub fn add_words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trie.extend(words);
        self
    }

    /// Add every line of a word file as a sensitive word
    pub fn add_words_from_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        load_file(&mut self.trie, path.as_ref())?;
        Ok(self)
    }

    /// Find the sensitive words in `text`, in order of appearance
    pub fn search<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.scanner().matches(text)
    }

    /// Find the character spans of the sensitive words in `text`
    pub fn find(&self, text: &str) -> Vec<MatchSpan> {
        self.scanner().scan(text)
    }

    /// Check whether `text` contains a sensitive word
    pub fn is_sensitive(&self, text: &str) -> bool {
        self.scanner().is_match(text)
    }

    /// Replace every sensitive word in `text` with the replacement unit,
    /// once per character.
    pub fn filter<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let spans = self.find(text);
        redact(text, &spans, &self.replace_code)
    }

    pub fn replace_code(&self) -> &str {
        &self.replace_code
    }

    pub fn disturbs(&self) -> &DisturbSet {
        &self.disturbs
    }

    /// Number of distinct sensitive words
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    pub fn is_cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn config(&self) -> &SensitiveConfig {
        &self.config
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.trie, &self.disturbs)
    }
}

impl fmt::Debug for Sensitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sensitive")
            .field("replace_code", &self.replace_code)
            .field("disturbs", &self.disturbs)
            .field("words", &self.trie.len())
            .field("cache", &self.cache.is_some())
            .finish()
    }
}

fn load_file(trie: &mut WordTrie, path: &Path) -> Result<()> {
    for line in FileWordSource::new(path).lines()? {
        trie.insert(&line?);
    }
    Ok(())
}
