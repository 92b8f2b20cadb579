mod disturb;
mod redactor;
mod scanner;
pub mod trie;

pub use disturb::DisturbSet;
pub use redactor::{redact, DEFAULT_REPLACE_CODE};
pub use scanner::{scan, MatchSpan, Scanner};
pub use trie::{trim_word, TrieNode, TrieSnapshot, WordTrie};
