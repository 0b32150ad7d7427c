//! Extractive summary fallback.

use notewise_core::defaults::{IMPORTANT_SENTENCE_MIN_LEN, SUMMARY_FILLER_PHRASES, SUMMARY_SENTENCES};

use super::segment::sentences;

/// Summarize by keeping the leading "important" sentences.
///
/// A sentence is important when it is longer than 20 characters and contains
/// no filler phrase ("thank you", "please"). Up to two important sentences
/// are joined with `". "` and closed with a period. Without any, the first two
/// sentences are joined the same way, followed by `"..."` when more were cut.
pub fn summarize(content: &str) -> String {
    let all = sentences(content);
    if all.is_empty() {
        // Nothing but terminators and whitespace.
        return content.trim().to_string();
    }

    let important: Vec<&str> = all.iter().copied().filter(|s| is_important(s)).collect();
    if !important.is_empty() {
        let take = important.len().min(SUMMARY_SENTENCES);
        return format!("{}.", important[..take].join(". "));
    }

    let take = all.len().min(SUMMARY_SENTENCES);
    let mut summary = all[..take].join(". ");
    if all.len() > SUMMARY_SENTENCES {
        summary.push_str("...");
    }
    summary
}

fn is_important(sentence: &str) -> bool {
    if sentence.chars().count() <= IMPORTANT_SENTENCE_MIN_LEN {
        return false;
    }
    let lower = sentence.to_lowercase();
    !SUMMARY_FILLER_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
}
