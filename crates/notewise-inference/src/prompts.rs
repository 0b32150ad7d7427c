//! Prompt templates sent to the generation provider.

use notewise_core::{DerivationRequest, Operation};

/// Fixed prompt used by the health probe.
pub const PROBE_PROMPT: &str = r#"Respond with just "OK" if you can read this."#;

/// Build the prompt for `op`.
pub fn for_operation(op: Operation, request: &DerivationRequest) -> String {
    match op {
        Operation::Summarize => summary_prompt(request.content()),
        Operation::Improve => improve_prompt(request.content()),
        Operation::Tags => tags_prompt(request.content(), request.title()),
        Operation::Title => title_prompt(request.content()),
    }
}

pub fn summary_prompt(content: &str) -> String {
    format!(
        "Please provide a concise summary of the following text. Focus on the main points and key ideas. Keep it under 100 words:\n\n{}",
        content
    )
}

pub fn improve_prompt(content: &str) -> String {
    format!(
        "Please improve the following text by correcting grammar, enhancing clarity, and making it more engaging while preserving the original meaning. Return only the improved text without any additional comments:\n\n{}",
        content
    )
}

pub fn tags_prompt(content: &str, title: Option<&str>) -> String {
    format!(
        r#"Generate 3-5 relevant tags for the following content. Return only a JSON array of tags without any additional text:

Title: {}
Content: {}

Return format: ["tag1", "tag2", "tag3"]"#,
        title.unwrap_or_default(),
        content
    )
}

pub fn title_prompt(content: &str) -> String {
    format!(
        "Generate a concise and engaging title (max 6-8 words) for the following content. Return only the title without any additional text:\n\n{}",
        content
    )
}
