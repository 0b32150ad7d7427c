//! Stopword set excluded from frequency-based heuristics.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

/// Common English function words.
const ENGLISH: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "this", "that", "these", "those", "have", "has", "had", "do", "does",
    "did", "will", "would", "could",
];

static ENGLISH_SET: Lazy<Arc<StopwordSet>> = Lazy::new(|| Arc::new(StopwordSet::from_list(ENGLISH)));

/// Immutable set of lowercase stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(ENGLISH)
    }
}

impl StopwordSet {
    /// Shared process-wide English set, built on first use.
    pub fn english() -> Arc<StopwordSet> {
        Arc::clone(&ENGLISH_SET)
    }

    /// Create a set from a custom list. Entries are lowercased.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check a word that is already lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
