use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use super::{TrieCache, DEFAULT_CACHE_KEY};
use crate::matcher::TrieSnapshot;

/// Directory name used under the system temp dir by `FileTrieCache::default()`
const DEFAULT_DIR_NAME: &str = "sensitive-word-filter";

/// File-backed trie cache storing one JSON snapshot per key
#[derive(Debug, Clone)]
pub struct FileTrieCache {
    dir: PathBuf,
    key: String,
}

impl FileTrieCache {
    /// Create a cache storing snapshots under `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            key: DEFAULT_CACHE_KEY.to_string(),
        }
    }

    /// Path of the snapshot file for the current key.
    ///
    /// ASCII letters, digits and `-` are kept; every other byte of the key is
    /// written as `_XX` (uppercase hex), so distinct keys never share a file.
    pub fn path(&self) -> PathBuf {
        let mut name = String::with_capacity(self.key.len());
        for byte in self.key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                name.push(char::from(byte));
            } else {
                name.push_str(&format!("_{:02X}", byte));
            }
        }
        self.dir.join(format!("{}.json", name))
    }

    fn write_snapshot(&self, snapshot: &TrieSnapshot) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path();
        let tmp_path = path.with_extension("tmp");

        let data = serde_json::to_vec(snapshot)?;
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)
    }
}

impl Default for FileTrieCache {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join(DEFAULT_DIR_NAME))
    }
}

impl TrieCache for FileTrieCache {
    fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
    }

    fn get(&self) -> Option<TrieSnapshot> {
        let path = self.path();
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read trie cache {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice(&data) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Ignoring corrupt trie cache {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&self, snapshot: &TrieSnapshot) -> bool {
        match self.write_snapshot(snapshot) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write trie cache {}: {}", self.path().display(), e);
                false
            }
        }
    }

    fn clear(&self) -> bool {
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => {
                warn!("Failed to remove trie cache {}: {}", path.display(), e);
                false
            }
        }
    }
}
