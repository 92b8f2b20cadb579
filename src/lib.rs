//! Sensitive Word Filter - trie-based sensitive word detection and redaction for Rust
//!
//! This library provides:
//! - Multi-word search over arbitrary Unicode text (one trie walk per offset)
//! - Redaction with a configurable replacement unit
//! - Disturb characters, skipped while matching to defeat obfuscation such as `s*b`
//! - Word lists from memory or from files, one word per line
//! - Trie caching through pluggable backends (memory, file)
//!
//! # Example
//!
//! ```rust
//! use sensitive_word_filter::{Sensitive, SensitiveConfig};
//!
//! let config = SensitiveConfig::new()
//!     .with_words(["笨蛋", "sb", "sss"])
//!     .with_disturbs(['*']);
//!
//! let mut sensitive = Sensitive::new(config).unwrap();
//!
//! assert_eq!(sensitive.search("你是笨蛋大s*b嘛"), vec!["笨蛋", "s*b"]);
//! assert_eq!(sensitive.filter("你是笨蛋大sb嘛"), "你是**大**嘛");
//!
//! sensitive.set_replace_code("o0");
//! assert_eq!(sensitive.filter("你是sb嘛"), "你是o0o0嘛");
//! ```
//!
//! # Matching
//!
//! Text is scanned left to right. At every character the longest registered
//! word starting there wins, and scanning resumes right after it, so matches
//! never overlap. Offsets and lengths count characters, not bytes.
//!
//! # Configuration
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `cache` | `false` | Persist the built trie |
//! | `cache_class` | `memory` | Registered cache backend (`memory`, `file`, `nil`) |
//! | `cache_key` | `sensitive_word_filter::Sensitive` | Cache entry key |
//! | `replace_code` | `*` | Replacement unit, repeated per matched character |
//! | `disturbs` | none | Characters skipped while matching |
//! | `words` | none | Sensitive words |
//! | `file` / `files` | none | Word list files |

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod sensitive;
pub mod shared;

// Re-export commonly used items
pub use cache::{
    CacheRegistry, CacheStatus, FileTrieCache, MemoryTrieCache, NilTrieCache, TrieCache,
    DEFAULT_CACHE_CLASS, DEFAULT_CACHE_KEY,
};
pub use config::SensitiveConfig;
pub use error::{CacheErrorKind, Result, SensitiveError};
pub use loader::{FileWordSource, WordLines};
pub use matcher::{
    redact, scan, DisturbSet, MatchSpan, Scanner, TrieSnapshot, WordTrie, DEFAULT_REPLACE_CODE,
};
pub use sensitive::Sensitive;
pub use shared::SharedSensitive;
