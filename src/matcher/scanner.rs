//! Greedy, leftmost, non-overlapping multi-word scan.
//!
//! At every character offset the scanner walks the trie as far as the text
//! allows, skipping disturb characters, and remembers the longest prefix that
//! ended on a complete word. A hit is emitted and scanning resumes right
//! after it; a miss advances by one character.

use super::disturb::DisturbSet;
use super::trie::WordTrie;

/// A matched range of the scanned text, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    /// Character offset of the first matched character
    pub start: usize,
    /// Number of matched characters, disturb characters included
    pub len: usize,
}

impl MatchSpan {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Character offset one past the last matched character
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Scans text against a word trie and a disturb set
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    trie: &'a WordTrie,
    disturbs: &'a DisturbSet,
}

impl<'a> Scanner<'a> {
    pub fn new(trie: &'a WordTrie, disturbs: &'a DisturbSet) -> Self {
        Self { trie, disturbs }
    }

    /// Find every match span in `text`, left to right
    pub fn scan(&self, text: &str) -> Vec<MatchSpan> {
        let chars: Vec<char> = text.chars().collect();
        self.scan_chars(&chars)
    }

    /// Find every matched slice of `text`, left to right
    pub fn matches<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let (chars, offsets): (Vec<char>, Vec<usize>) =
            text.char_indices().map(|(i, ch)| (ch, i)).unzip();
        let byte_at = |idx: usize| offsets.get(idx).copied().unwrap_or(text.len());

        self.scan_chars(&chars)
            .into_iter()
            .map(|span| &text[byte_at(span.start)..byte_at(span.end())])
            .collect()
    }

    /// Check whether `text` contains at least one sensitive word
    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        (0..chars.len()).any(|i| self.probe(&chars, i) > 0)
    }

    fn scan_chars(&self, chars: &[char]) -> Vec<MatchSpan> {
        let mut spans = Vec::new();
        if self.trie.root().is_leaf() {
            return spans;
        }

        let mut i = 0;
        while i < chars.len() {
            match self.probe(chars, i) {
                0 => i += 1,
                len => {
                    spans.push(MatchSpan::new(i, len));
                    i += len;
                }
            }
        }
        spans
    }

    /// Length of the longest match starting at `start`, or 0.
    fn probe(&self, chars: &[char], start: usize) -> usize {
        let mut node = self.trie.root();
        let mut consumed = 0;
        let mut best = 0;

        for &ch in &chars[start..] {
            if self.disturbs.contains(ch) {
                consumed += 1;
                continue;
            }

            match node.child(ch) {
                Some(next) => {
                    node = next;
                    consumed += 1;
                    if node.is_word() {
                        best = consumed;
                    }
                }
                None => break,
            }
        }

        best
    }
}

/// Scan `text` for sensitive words
pub fn scan(text: &str, trie: &WordTrie, disturbs: &DisturbSet) -> Vec<MatchSpan> {
    Scanner::new(trie, disturbs).scan(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::TrieSnapshot;

    fn trie(words: &[&str]) -> WordTrie {
        words.iter().collect()
    }

    #[test]
    fn test_scan_cjk_and_ascii() {
        let trie = trie(&["笨蛋", "sb", "sss"]);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(
            scanner.scan("你是笨蛋大sb嘛"),
            vec![MatchSpan::new(2, 2), MatchSpan::new(5, 2)]
        );
        assert_eq!(scanner.matches("你是笨蛋大sb嘛"), vec!["笨蛋", "sb"]);
    }

    #[test]
    fn test_empty_inputs() {
        let disturbs = DisturbSet::new();
        let empty = WordTrie::new();
        assert!(scan("你是笨蛋大sb嘛", &empty, &disturbs).is_empty());

        let words = trie(&["sb"]);
        assert!(scan("", &words, &disturbs).is_empty());
        assert!(!Scanner::new(&words, &disturbs).is_match(""));
    }

    #[test]
    fn test_restored_trie_scans_like_inserted() {
        let json = r#"{"root":{"children":{"s":{"children":{"b":{"is_word":true}}}}}}"#;
        let snapshot: TrieSnapshot = serde_json::from_str(json).unwrap();
        let restored = WordTrie::from(snapshot);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&restored, &disturbs);

        assert_eq!(scanner.matches("你是sb嘛"), vec!["sb"]);
        assert!(scanner.is_match("你是sb嘛"));
    }

    #[test]
    fn test_disturb_chars_are_skipped_and_counted() {
        let trie = trie(&["sb"]);
        let disturbs = DisturbSet::from_chars("*");
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.matches("s*b"), vec!["s*b"]);
        assert_eq!(scanner.matches("s***b"), vec!["s***b"]);
        assert_eq!(scanner.scan("xs**by"), vec![MatchSpan::new(1, 4)]);
    }

    #[test]
    fn test_without_disturbs_obfuscation_is_missed() {
        let trie = trie(&["sb"]);
        let disturbs = DisturbSet::new();
        assert!(scan("s*b", &trie, &disturbs).is_empty());
    }

    #[test]
    fn test_trailing_disturbs_are_not_part_of_match() {
        let trie = trie(&["sb"]);
        let disturbs = DisturbSet::from_chars("*");
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.matches("sb**x"), vec!["sb"]);
    }

    #[test]
    fn test_leading_disturbs_are_part_of_match() {
        let trie = trie(&["sb"]);
        let disturbs = DisturbSet::from_chars("*");
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.scan("**sb"), vec![MatchSpan::new(0, 4)]);
        assert_eq!(scanner.scan("a*sb"), vec![MatchSpan::new(1, 3)]);
    }

    #[test]
    fn test_longest_match_wins() {
        let trie = trie(&["ab", "abc"]);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.matches("xabcx"), vec!["abc"]);
    }

    #[test]
    fn test_prefix_word_survives_failed_extension() {
        let trie = trie(&["ab", "abcd"]);
        let disturbs = DisturbSet::from_chars("*");
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.matches("abcx"), vec!["ab"]);
        assert_eq!(scanner.matches("a*bc*x"), vec!["a*b"]);
        assert_eq!(scanner.matches("abc"), vec!["ab"]);
    }

    #[test]
    fn test_matches_do_not_overlap() {
        let trie = trie(&["aa"]);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(
            scanner.scan("aaaaa"),
            vec![MatchSpan::new(0, 2), MatchSpan::new(2, 2)]
        );
    }

    #[test]
    fn test_overlapping_words_take_leftmost() {
        let trie = trie(&["abc", "cde"]);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(scanner.matches("abcde"), vec!["abc"]);
        assert_eq!(scanner.matches("xcde"), vec!["cde"]);
    }

    #[test]
    fn test_disturb_char_inside_word_never_matches_literally() {
        let trie = trie(&["a*b"]);
        let disturbs = DisturbSet::from_chars("*");
        assert!(scan("a*b", &trie, &disturbs).is_empty());
    }

    #[test]
    fn test_is_match() {
        let trie = trie(&["笨蛋"]);
        let disturbs = DisturbSet::from_chars(" ");
        let scanner = Scanner::new(&trie, &disturbs);

        assert!(scanner.is_match("你是笨 蛋"));
        assert!(!scanner.is_match("你是笨"));
    }

    #[test]
    fn test_spans_are_char_based() {
        let trie = trie(&["é"]);
        let disturbs = DisturbSet::new();
        let scanner = Scanner::new(&trie, &disturbs);

        assert_eq!(
            scanner.scan("ééaé"),
            vec![
                MatchSpan::new(0, 1),
                MatchSpan::new(1, 1),
                MatchSpan::new(3, 1),
            ]
        );
        assert_eq!(scanner.matches("ééaé"), vec!["é", "é", "é"]);
    }
}
