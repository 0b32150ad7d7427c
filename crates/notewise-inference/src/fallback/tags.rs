//! Frequency-based tag fallback.

use std::collections::HashMap;

use notewise_core::defaults::{MAX_TAGS, MIN_TAG_WORD_LEN};

use super::segment::capitalize_first;
use super::stopwords::StopwordSet;

/// Word counts that remember the order in which words first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count qualifying words in `text`.
    ///
    /// The text is lowercased and split on whitespace; each token keeps only
    /// `[a-z0-9]`. Tokens of four or more characters that are not stopwords
    /// are counted.
    pub fn from_text(text: &str, stopwords: &StopwordSet) -> Self {
        let mut table = Self::default();
        for token in text.to_lowercase().split_whitespace() {
            let word: String = token
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect();
            if word.len() > MIN_TAG_WORD_LEN && !stopwords.contains(&word) {
                table.record(word);
            }
        }
        table
    }

    fn record(&mut self, word: String) {
        match self.index.get(&word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent words, ties broken by first appearance.
    pub fn top(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, usize)> = self.entries.iter().collect();
        // Stable sort keeps first-seen order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(word, _)| word.as_str())
            .collect()
    }
}

/// Pick up to five capitalized keywords from the title and content.
///
/// Returns an empty list when no word qualifies.
pub fn tags(content: &str, title: Option<&str>, stopwords: &StopwordSet) -> Vec<String> {
    let text = match title {
        Some(title) if !title.is_empty() => format!("{} {}", title, content),
        _ => content.to_string(),
    };

    WordFrequencyTable::from_text(&text, stopwords)
        .top(MAX_TAGS)
        .into_iter()
        .map(capitalize_first)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> std::sync::Arc<StopwordSet> {
        StopwordSet::english()
    }

    #[test]
    fn test_frequency_table() {
        let table = WordFrequencyTable::from_text(
            "testing testing database database database caching",
            &english(),
        );
        assert_eq!(table.len(), 3);
        assert_eq!(table.count("testing"), 2);
        assert_eq!(table.count("database"), 3);
        assert_eq!(table.count("caching"), 1);
        assert_eq!(table.count("missing"), 0);
    }

    #[test]
    fn test_tags_ordered_by_count() {
        assert_eq!(
            tags("testing testing database database database caching", None, &english()),
            vec!["Database", "Testing", "Caching"]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        assert_eq!(
            tags("zeta alpha mango zeta alpha mango", None, &english()),
            vec!["Zeta", "Alpha", "Mango"]
        );
    }

    #[test]
    fn test_at_most_five() {
        let result = tags("one1 two2 three four five2 six6 seven", None, &english());
        assert_eq!(result, vec!["One1", "Two2", "Three", "Four", "Five2"]);
    }

    #[test]
    fn test_title_words_count_first() {
        assert_eq!(
            tags("rust compiler notes", Some("Borrow checker"), &english()),
            vec!["Borrow", "Checker", "Rust", "Compiler", "Notes"]
        );
    }

    #[test]
    fn test_empty_title_is_ignored() {
        assert_eq!(tags("kubernetes", Some(""), &english()), vec!["Kubernetes"]);
    }

    #[test]
    fn test_punctuation_stripped_and_case_folded() {
        assert_eq!(
            tags("Redis, redis! REDIS? (postgres)", None, &english()),
            vec!["Redis", "Postgres"]
        );
    }

    #[test]
    fn test_stopwords_and_short_words_skipped() {
        assert!(tags("the cat and dog were with those", None, &english()).is_empty());
    }

    #[test]
    fn test_custom_stopwords() {
        let stopwords = StopwordSet::from_list(&["meeting"]);
        assert_eq!(
            tags("meeting meeting agenda", None, &stopwords),
            vec!["Agenda"]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "alpha beta gamma delta alpha beta epsilon zeta";
        assert_eq!(tags(text, None, &english()), tags(text, None, &english()));
    }
}
