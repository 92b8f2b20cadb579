//! Name-based cache class resolution.
//!
//! Configuration refers to a cache backend by class name. The registry maps
//! names to constructors; a constructor may build any component, and only
//! components that are trie caches are accepted when an engine resolves its
//! cache.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use super::{FileTrieCache, MemoryTrieCache, NilTrieCache, TrieCache};
use crate::error::{CacheErrorKind, Result, SensitiveError};

/// Class used when caching is enabled without naming one
pub const DEFAULT_CACHE_CLASS: &str = "memory";

type Constructor = Box<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// Registry of named cache classes
pub struct CacheRegistry {
    constructors: HashMap<String, Constructor>,
}

impl CacheRegistry {
    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry with the built-in `memory`, `file` and `nil` classes
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<MemoryTrieCache>(DEFAULT_CACHE_CLASS);
        registry.register::<FileTrieCache>("file");
        registry.register::<NilTrieCache>("nil");
        registry
    }

    /// Register a trie cache class constructed through `Default`
    pub fn register<C>(&mut self, name: &str)
    where
        C: TrieCache + Default + 'static,
    {
        self.register_with(name, || C::default());
    }

    /// Register a trie cache class with a custom constructor
    pub fn register_with<C, F>(&mut self, name: &str, ctor: F)
    where
        C: TrieCache + 'static,
        F: Fn() -> C + Send + Sync + 'static,
    {
        self.constructors.insert(
            name.to_string(),
            Box::new(move || Box::new(Box::new(ctor()) as Box<dyn TrieCache>) as Box<dyn Any>),
        );
    }

    /// Register an arbitrary component under `name`.
    ///
    /// The registry can be shared with other parts of a host application.
    /// Such components resolve fine by name but are rejected as caches.
    pub fn register_component<T, F>(&mut self, name: &str, ctor: F)
    where
        T: Any,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.constructors
            .insert(name.to_string(), Box::new(move || Box::new(ctor()) as Box<dyn Any>));
    }

    /// Check whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Construct the trie cache registered under `name`
    pub fn resolve(&self, name: &str) -> Result<Box<dyn TrieCache>> {
        let ctor = self.constructors.get(name).ok_or_else(|| {
            SensitiveError::cache(
                CacheErrorKind::ClassNotFound,
                format!("cache class not exists: {}", name),
            )
        })?;

        ctor().downcast::<Box<dyn TrieCache>>().map(|cache| *cache).map_err(|_| {
            SensitiveError::cache(
                CacheErrorKind::NotTrieCache,
                format!("cache class {} does not implement TrieCache", name),
            )
        })
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CacheRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.constructors.keys().collect();
        names.sort();
        f.debug_struct("CacheRegistry")
            .field("classes", &names)
            .finish()
    }
}
