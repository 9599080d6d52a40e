use rustc_hash::{FxHashMap, FxHashSet};

/// Suffixes bucketed by length in characters.
#[derive(Clone, Debug, Default)]
pub struct SuffixTable {
    by_length: FxHashMap<usize, FxHashSet<String>>,
    min_len: usize,
    max_len: usize,
}

impl SuffixTable {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_length: FxHashMap<usize, FxHashSet<String>> = FxHashMap::default();
        for suffix in suffixes {
            let suffix: String = suffix.into();
            let len = suffix.chars().count();
            if len > 0 {
                by_length.entry(len).or_default().insert(suffix.to_lowercase());
            }
        }
        let min_len = by_length.keys().copied().min().unwrap_or(0);
        let max_len = by_length.keys().copied().max().unwrap_or(0);
        Self {
            by_length,
            min_len,
            max_len,
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Whether the last `len` characters of `word` are a registered suffix.
    pub fn matches_at(&self, word: &str, len: usize) -> bool {
        match (self.by_length.get(&len), last_chars(word, len)) {
            (Some(bucket), Some(ending)) => bucket.contains(ending),
            _ => false,
        }
    }

    /// The longest registered suffix of `word`, leaving at least one
    /// character of stem.
    pub fn longest_match<'w>(&self, word: &'w str) -> Option<&'w str> {
        self.longest_match_within(word, self.min_len, self.max_len)
    }

    /// Like [`SuffixTable::longest_match`], but scanning the lengths
    /// `min_len..=max_len` instead of this table's own bounds.
    pub fn longest_match_within<'w>(
        &self,
        word: &'w str,
        min_len: usize,
        max_len: usize,
    ) -> Option<&'w str> {
        if self.is_empty() || min_len == 0 {
            return None;
        }
        let upper = word.chars().count().saturating_sub(1).min(max_len);
        (min_len..=upper)
            .rev()
            .find(|len| self.matches_at(word, *len))
            .and_then(|len| last_chars(word, len))
    }
}

fn last_chars(word: &str, len: usize) -> Option<&str> {
    if len == 0 {
        return Some("");
    }
    word.char_indices()
        .rev()
        .nth(len - 1)
        .map(|(start, _)| &word[start..])
}
