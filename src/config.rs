//! Engine configuration.
//!
//! Built programmatically with the `with_*` methods, parsed from JSON, or
//! read from `SENSITIVE_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::error::{Result, SensitiveError};

/// Sensitive engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SensitiveConfig {
    /// Persist the built trie through a cache backend
    pub cache: bool,
    /// Registered cache class name; `DEFAULT_CACHE_CLASS` when unset
    pub cache_class: Option<String>,
    /// Cache entry key; `DEFAULT_CACHE_KEY` when unset
    pub cache_key: Option<String>,
    /// Replacement unit; `*` when unset
    pub replace_code: Option<String>,
    /// Characters skipped while matching
    pub disturbs: Option<Vec<char>>,
    /// Sensitive words
    pub words: Option<Vec<String>>,
    /// Word list files, one word per line
    #[serde(alias = "file", deserialize_with = "one_or_many")]
    pub files: Vec<PathBuf>,
}

impl SensitiveConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable caching
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Set the cache class name
    pub fn with_cache_class(mut self, class: impl Into<String>) -> Self {
        self.cache_class = Some(class.into());
        self
    }

    /// Set the cache key
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = Some(key.into());
        self
    }

    /// Set the replacement unit
    pub fn with_replace_code(mut self, code: impl Into<String>) -> Self {
        self.replace_code = Some(code.into());
        self
    }

    /// Set disturb characters
    pub fn with_disturbs(mut self, disturbs: impl IntoIterator<Item = char>) -> Self {
        self.disturbs = Some(disturbs.into_iter().collect());
        self
    }

    /// Set sensitive words
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Add a word list file
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Parse a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SensitiveError::ConfigError(format!("Invalid JSON config: {}", e)))
    }

    /// Read a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Read configuration from `SENSITIVE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Build a configuration from `SENSITIVE_*` key/value pairs.
    ///
    /// Recognised keys: `SENSITIVE_CACHE`, `SENSITIVE_CACHE_CLASS`,
    /// `SENSITIVE_CACHE_KEY`, `SENSITIVE_REPLACE_CODE`, `SENSITIVE_DISTURBS`
    /// (every character is one disturb) and `SENSITIVE_FILE` (a platform
    /// path list). Other keys are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut config = Self::default();

        for (key, value) in vars {
            let value = value.into();
            match key.as_ref() {
                "SENSITIVE_CACHE" => config.cache = parse_bool(&value)?,
                "SENSITIVE_CACHE_CLASS" => config.cache_class = non_empty(value),
                "SENSITIVE_CACHE_KEY" => config.cache_key = non_empty(value),
                "SENSITIVE_REPLACE_CODE" => config.replace_code = non_empty(value),
                "SENSITIVE_DISTURBS" => config.disturbs = Some(parse_disturbs(&value)),
                "SENSITIVE_FILE" => {
                    config.files = std::env::split_paths(&value)
                        .filter(|p| !p.as_os_str().is_empty())
                        .collect();
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Split a disturb string into unique characters, keeping first-seen order
pub fn parse_disturbs(value: &str) -> Vec<char> {
    let mut chars = Vec::new();
    for ch in value.chars() {
        if !chars.contains(&ch) {
            chars.push(ch);
        }
    }
    chars
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" | "null" => Ok(false),
        other => Err(SensitiveError::ConfigError(format!(
            "Invalid boolean for SENSITIVE_CACHE: {}",
            other
        ))),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(PathBuf),
        Many(Vec<PathBuf>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(path)) => vec![path],
        Some(OneOrMany::Many(paths)) => paths,
        None => Vec::new(),
    })
}
