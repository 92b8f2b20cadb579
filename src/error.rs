use std::path::PathBuf;

use thiserror::Error;

/// Classifies cache errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheErrorKind {
    /// Configured cache class is not registered
    ClassNotFound,
    /// Configured cache class resolves to something that is not a trie cache
    NotTrieCache,
    /// Backend refused to store the trie snapshot
    SaveFailed,
    /// Backend refused to drop the stored trie snapshot
    ClearFailed,
}

/// Sensitive word filter error types
#[derive(Error, Debug)]
pub enum SensitiveError {
    #[error("Cache error: {message}")]
    CacheError {
        kind: CacheErrorKind,
        message: String,
    },

    #[error("Failed to read word file {path:?}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SensitiveError {
    pub(crate) fn cache(kind: CacheErrorKind, message: impl Into<String>) -> Self {
        SensitiveError::CacheError {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SensitiveError::FileReadError {
            path: path.into(),
            source,
        }
    }

    /// Returns the cache error kind, if this is a cache error
    pub fn cache_kind(&self) -> Option<CacheErrorKind> {
        match self {
            SensitiveError::CacheError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SensitiveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_error_kind_is_matchable() {
        let err = SensitiveError::cache(CacheErrorKind::SaveFailed, "save cache failed");
        match &err {
            SensitiveError::CacheError { kind, .. } => {
                assert!(matches!(kind, CacheErrorKind::SaveFailed));
            }
            _ => panic!("expected CacheError"),
        }
        assert_eq!(err.cache_kind(), Some(CacheErrorKind::SaveFailed));
    }

    #[test]
    fn test_cache_error_display_includes_message() {
        let err = SensitiveError::cache(CacheErrorKind::ClassNotFound, "cache class not exists");
        let display = format!("{}", err);
        assert!(display.contains("cache class not exists"), "got: {}", display);
    }

    #[test]
    fn test_file_read_error_display_includes_path() {
        let err = SensitiveError::file_read(
            "/missing/words.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let display = format!("{}", err);
        assert!(display.contains("/missing/words.txt"), "got: {}", display);
        assert_eq!(err.cache_kind(), None);
    }
}
