//! Sentence segmentation shared by the fallback heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more sentence terminators.
static TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// A terminator followed by whitespace; the terminator stays with its sentence.
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Split on runs of `.`, `!` or `?`, trimming fragments and dropping empty ones.
///
/// ```
/// use notewise_inference::fallback::segment::sentences;
///
/// assert_eq!(sentences("Hi there!! How are you? ...Fine."), vec!["Hi there", "How are you", "Fine"]);
/// ```
pub fn sentences(text: &str) -> Vec<&str> {
    TERMINATORS
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Text before the first terminator, trimmed. Empty if the text starts with one.
pub fn leading_fragment(text: &str) -> &str {
    TERMINATORS.split(text).next().unwrap_or_default().trim()
}

/// Split after a terminator that is followed by whitespace.
///
/// Terminators stay attached to the preceding sentence and the separating
/// whitespace is dropped. Fragments are returned untrimmed.
pub fn split_keeping_terminators(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for mat in BOUNDARY.find_iter(text) {
        // Terminators are single-byte ASCII.
        pieces.push(&text[start..mat.start() + 1]);
        start = mat.end();
    }
    pieces.push(&text[start..]);

    pieces
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
