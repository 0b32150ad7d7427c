//! Title fallback derived from the opening sentence.

use notewise_core::defaults::{DEFAULT_TITLE, TITLE_MAX_LEN, TITLE_MIN_LEN, TITLE_TRUNCATE_LEN};

use super::segment::leading_fragment;

/// Use the text before the first terminator as the title.
///
/// Titles longer than 60 characters are cut to 57 and end in `"..."`.
/// Anything shorter than three characters becomes the default title.
pub fn title(content: &str) -> String {
    let first = leading_fragment(content);

    let title = if first.chars().count() > TITLE_MAX_LEN {
        let truncated: String = first.chars().take(TITLE_TRUNCATE_LEN).collect();
        format!("{}...", truncated.trim())
    } else {
        first.to_string()
    };

    if title.chars().count() < TITLE_MIN_LEN {
        return DEFAULT_TITLE.to_string();
    }
    title
}
