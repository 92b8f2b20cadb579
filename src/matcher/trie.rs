//! Character trie holding the sensitive word set.
//!
//! Every node carries its own `is_word` flag next to its children, so a word
//! may be a strict prefix of another ("ab" and "abc") without either entry
//! overwriting the other.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Characters stripped from both ends of a word before insertion.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '\'', '"', '`'];

/// Trim surrounding whitespace and quote characters from a raw word.
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(TRIM_CHARS)
}

/// A single trie node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    children: HashMap<char, TrieNode>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    is_word: bool,
}

impl TrieNode {
    /// Get the child reached by `ch`, if any
    #[inline]
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Whether the path ending at this node spells a complete word
    #[inline]
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Whether this node has no outgoing edges
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of complete words in the subtree rooted at this node
    pub fn word_count(&self) -> usize {
        let below: usize = self.children.values().map(TrieNode::word_count).sum();
        below + usize::from(self.is_word)
    }
}

/// Owned copy of a whole trie, the only form in which a trie is handed to a
/// cache backend.
///
/// Only the tree is stored; the word count is always derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSnapshot {
    root: TrieNode,
}

impl TrieSnapshot {
    /// Number of words held by the snapshot
    pub fn word_count(&self) -> usize {
        self.root.word_count()
    }

    /// Check if the snapshot holds no word
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }
}

/// Prefix tree over the characters of every registered sensitive word
#[derive(Debug, Clone, Default)]
pub struct WordTrie {
    root: TrieNode,
    words: usize,
}

impl WordTrie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word after trimming whitespace and quotes.
    ///
    /// Returns `true` if the word was not registered before. Words that are
    /// empty after trimming are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = trim_word(word);
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.words += 1;
        true
    }

    /// Check whether exactly this word (after trimming) is registered
    pub fn contains(&self, word: &str) -> bool {
        let word = trim_word(word);
        if word.is_empty() {
            return false;
        }

        let mut node = &self.root;
        for ch in word.chars() {
            match node.child(ch) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_word
    }

    /// Forget every registered word
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.words = 0;
    }

    /// Root node, the starting point of every scan
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct registered words
    pub fn len(&self) -> usize {
        self.words
    }

    /// Check if the trie is empty
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Take an owned copy of the trie
    pub fn snapshot(&self) -> TrieSnapshot {
        TrieSnapshot {
            root: self.root.clone(),
        }
    }

    /// Replace the whole trie with a snapshot
    pub fn restore(&mut self, snapshot: TrieSnapshot) {
        self.words = snapshot.word_count();
        self.root = snapshot.root;
    }
}

impl From<TrieSnapshot> for WordTrie {
    fn from(snapshot: TrieSnapshot) -> Self {
        Self {
            words: snapshot.word_count(),
            root: snapshot.root,
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = WordTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_trie() {
        let trie = WordTrie::new();
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
        assert!(!trie.root().is_word());
        assert!(!trie.contains("sb"));
    }

    #[test]
    fn test_insert_and_contains() {
        let trie: WordTrie = ["笨蛋", "sb", "sss"].into_iter().collect();

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("笨蛋"));
        assert!(trie.contains("sb"));
        assert!(trie.contains("sss"));
        assert!(!trie.contains("s"));
        assert!(!trie.contains("笨"));
        assert!(!trie.contains("sbb"));
    }

    #[test]
    fn test_insert_trims_whitespace_and_quotes() {
        let mut trie = WordTrie::new();
        assert!(trie.insert("  'sb'\r\n"));
        assert!(trie.insert("\"`zz`\""));
        assert!(trie.insert("\t\x0B笨蛋\0"));

        assert!(trie.contains("sb"));
        assert!(trie.contains("zz"));
        assert!(trie.contains("笨蛋"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_inner_quotes_are_kept() {
        let mut trie = WordTrie::new();
        trie.insert("it's");
        assert!(trie.contains("it's"));
        assert!(!trie.contains("its"));
    }

    #[test]
    fn test_empty_after_trim_is_ignored() {
        let mut trie = WordTrie::new();
        assert!(!trie.insert(""));
        assert!(!trie.insert("  \n"));
        assert!(!trie.insert("\"''\""));
        assert!(trie.is_empty());
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = WordTrie::new();
        assert!(trie.insert("sb"));
        let before = trie.snapshot();

        assert!(!trie.insert("sb"));
        assert!(!trie.insert(" sb "));
        assert_eq!(trie.snapshot(), before);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_prefix_and_extension_coexist() {
        let mut trie = WordTrie::new();
        trie.insert("abc");
        trie.insert("ab");

        assert!(trie.contains("ab"));
        assert!(trie.contains("abc"));

        let b = trie.root().child('a').and_then(|n| n.child('b')).unwrap();
        assert!(b.is_word());
        assert!(!b.is_leaf());
    }

    #[test]
    fn test_clear() {
        let mut trie: WordTrie = ["sb", "zz"].into_iter().collect();
        trie.clear();

        assert!(trie.is_empty());
        assert!(!trie.contains("sb"));
        assert!(trie.root().is_leaf());
    }

    #[test]
    fn test_snapshot_restore() {
        let trie: WordTrie = ["笨蛋", "sb", "sbc"].into_iter().collect();
        let snapshot = trie.snapshot();
        assert_eq!(snapshot.word_count(), 3);

        let mut restored = WordTrie::new();
        restored.insert("unrelated");
        restored.restore(snapshot.clone());

        assert!(!restored.contains("unrelated"));
        assert!(restored.contains("笨蛋"));
        assert!(restored.contains("sbc"));
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(WordTrie::from(snapshot).len(), 3);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let trie: WordTrie = ["笨蛋", "ab", "abc"].into_iter().collect();
        let json = serde_json::to_string(&trie.snapshot()).unwrap();
        let decoded: TrieSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, trie.snapshot());
    }

    #[test]
    fn test_restore_counts_words_from_tree() {
        let json = r#"{"root":{"children":{"s":{"children":{"b":{"is_word":true,"children":{"c":{"is_word":true}}}}}}},"words":0}"#;
        let snapshot: TrieSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.word_count(), 2);
        assert!(!snapshot.is_empty());

        let mut restored = WordTrie::new();
        restored.restore(snapshot.clone());
        assert_eq!(restored.len(), 2);
        assert!(restored.contains("sb"));
        assert!(restored.contains("sbc"));

        let inserted: WordTrie = ["sb", "sbc"].into_iter().collect();
        assert_eq!(restored.snapshot(), inserted.snapshot());
        assert_eq!(WordTrie::from(snapshot).len(), 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = WordTrie::new().snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.word_count(), 0);
    }
}
