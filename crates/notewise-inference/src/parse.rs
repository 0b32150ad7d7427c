//! Extraction of structured data from free-text provider replies.
//!
//! Tag replies are parsed in one of two ways. A reply containing a bracketed
//! span must decode as a JSON list; a reply without one is split on commas.
//! When the chosen strategy yields no usable tag the parser returns
//! [`ParseFailure`] and the caller switches to the local heuristic.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use notewise_core::defaults::{MAX_TAGS, MAX_TAG_LEN};
use notewise_core::logging;

/// First `[` to last `]` on a single line.
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*\]").unwrap());

/// Leading `Title:` label some models prepend.
static TITLE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^title:\s*").unwrap());

/// The reply held nothing usable as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no usable tags in provider reply")]
pub struct ParseFailure;

/// Parse a tag-generation reply into at most five tags of 1 to 20 characters.
///
/// ```
/// use notewise_inference::parse::parse_tags;
///
/// let tags = parse_tags(r#"Here are tags: ["Alpha", "Beta", "Gamma"]"#).unwrap();
/// assert_eq!(tags, vec!["Alpha", "Beta", "Gamma"]);
///
/// let tags = parse_tags("alpha, beta, gamma").unwrap();
/// assert_eq!(tags, vec!["alpha", "beta", "gamma"]);
/// ```
pub fn parse_tags(reply: &str) -> Result<Vec<String>, ParseFailure> {
    let (strategy, tags) = match BRACKETED.find(reply) {
        Some(span) => ("bracketed", parse_bracketed(span.as_str()).ok_or(ParseFailure)?),
        None => ("delimited", split_delimited(reply)),
    };

    let tags = usable_tags(tags);
    if tags.is_empty() {
        return Err(ParseFailure);
    }
    debug!(
        { logging::PARSE_STRATEGY } = strategy,
        { logging::TAG_COUNT } = tags.len(),
        "Parsed tag reply"
    );
    Ok(tags)
}

/// Strict pass: decode the bracketed span as a JSON array, keeping strings.
fn parse_bracketed(span: &str) -> Option<Vec<String>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(span).ok()?;
    Some(
        values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::String(tag) => Some(tag.trim().to_string()),
                _ => None,
            })
            .collect(),
    )
}

/// Permissive pass for replies with no brackets: split on commas and drop quote and bracket characters.
fn split_delimited(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(|piece| {
            piece
                .chars()
                .filter(|c| !matches!(c, '"' | '\'' | '[' | ']'))
                .collect::<String>()
                .trim()
                .to_string()
        })
        .collect()
}

fn usable_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .filter(|tag| (1..=MAX_TAG_LEN).contains(&tag.chars().count()))
        .take(MAX_TAGS)
        .collect()
}

/// Normalize a title reply: drop quotes and a leading `Title:` label.
///
/// May return an empty string, which callers treat as an empty reply.
pub fn clean_title(reply: &str) -> String {
    let unquoted: String = reply.chars().filter(|c| !matches!(c, '"' | '\'')).collect();
    TITLE_LABEL.replace(&unquoted, "").trim().to_string()
}
