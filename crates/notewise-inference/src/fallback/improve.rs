//! Capitalization pass used when the provider cannot rewrite text.

use super::segment::{capitalize_first, split_keeping_terminators};

/// Upper-case the first letter of every sentence and rejoin with single spaces.
///
/// Punctuation, spelling and grammar are left exactly as written.
pub fn improve(content: &str) -> String {
    split_keeping_terminators(content)
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}
