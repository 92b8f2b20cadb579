use std::collections::HashSet;

/// Characters skipped while walking the trie.
///
/// Disturb characters are noise inserted into a sensitive word to dodge the
/// filter ("s*b"). They never move the trie pointer but still count towards
/// the length of the surrounding match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisturbSet {
    chars: HashSet<char>,
}

impl DisturbSet {
    /// Create an empty disturb set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a disturb set from every character of a string
    pub fn from_chars(s: &str) -> Self {
        s.chars().collect()
    }

    /// Check if `ch` is a disturb character
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Add a disturb character
    pub fn insert(&mut self, ch: char) -> bool {
        self.chars.insert(ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl FromIterator<char> for DisturbSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl Extend<char> for DisturbSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.chars.extend(iter);
    }
}
