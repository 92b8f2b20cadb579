//! Word list sources.
//!
//! Word files hold one word per line. They are read lazily so large lists
//! never have to sit in memory as a whole.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{Result, SensitiveError};

/// A word list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and iterate its lines.
    ///
    /// Every call reopens the file and starts from the first line. Failing
    /// to open is reported here, before any line is produced.
    pub fn lines(&self) -> Result<WordLines> {
        let file =
            File::open(&self.path).map_err(|e| SensitiveError::file_read(&self.path, e))?;
        Ok(WordLines {
            path: self.path.clone(),
            lines: BufReader::new(file).lines(),
        })
    }
}

/// Lazy iterator over the raw lines of a word file
#[derive(Debug)]
pub struct WordLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for WordLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|line| line.map_err(|e| SensitiveError::file_read(&self.path, e)))
    }
}
