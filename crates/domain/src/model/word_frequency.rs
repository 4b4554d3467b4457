// crates/domain/src/model/word_frequency.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrence counts of normalized words, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequency(IndexMap<String, usize>);

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every non-empty word; empty strings are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut freq = Self::new();
        for word in words {
            freq.record(word.as_ref());
        }
        freq
    }

    fn record(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        match self.0.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.0.insert(word.to_owned(), 1);
            }
        }
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.0.get(word).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The key with the highest count. On equal counts the earlier key is kept.
    pub fn most_common(&self) -> Option<&str> {
        self.iter()
            .fold(None, |best: Option<(&str, usize)>, (word, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((word, count)),
            })
            .map(|(word, _)| word)
    }

    /// Up to `n` entries ordered by descending count; equal counts keep insertion order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}
