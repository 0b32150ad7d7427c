//! Centralized default constants for the notewise pipeline.
//!
//! Every crate references these constants instead of defining its own magic
//! numbers. Fallback notes are user-visible.

// =============================================================================
// PROVIDER
// =============================================================================

/// Default OpenAI-compatible API root.
pub const PROVIDER_URL: &str = "https://api.openai.com/v1";

/// Default generation model.
pub const GEN_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.7;

/// API key value shipped in sample `.env` files. Treated as absent.
pub const PLACEHOLDER_API_KEY: &str = "sk-your-actual-openai-api-key-here";

// =============================================================================
// TOKEN BUDGETS
// =============================================================================

/// Budget for title generation (smallest).
pub const TITLE_MAX_TOKENS: u32 = 50;

/// Budget for tag generation.
pub const TAGS_MAX_TOKENS: u32 = 100;

/// Budget for summarization.
pub const SUMMARY_MAX_TOKENS: u32 = 150;

/// Budget for text improvement (largest, also the default).
pub const IMPROVE_MAX_TOKENS: u32 = 500;

/// Budget for the health probe.
pub const PROBE_MAX_TOKENS: u32 = 10;

// =============================================================================
// TAGS
// =============================================================================

/// Maximum number of tags returned by any path.
pub const MAX_TAGS: usize = 5;

/// Maximum character length of a provider-supplied tag.
pub const MAX_TAG_LEN: usize = 20;

/// Minimum cleaned word length (exclusive) counted by the tag fallback.
pub const MIN_TAG_WORD_LEN: usize = 3;

// =============================================================================
// SUMMARY
// =============================================================================

/// Number of sentences kept by the summary fallback.
pub const SUMMARY_SENTENCES: usize = 2;

/// Sentences must be longer than this (in characters) to count as important.
pub const IMPORTANT_SENTENCE_MIN_LEN: usize = 20;

/// Case-insensitive phrases that disqualify a sentence from the summary.
pub const SUMMARY_FILLER_PHRASES: &[&str] = &["thank you", "please"];

// =============================================================================
// TITLE
// =============================================================================

/// Longest fallback title, in characters, before truncation kicks in.
pub const TITLE_MAX_LEN: usize = 60;

/// Characters kept when a fallback title is truncated (before the ellipsis).
pub const TITLE_TRUNCATE_LEN: usize = 57;

/// Shortest acceptable fallback title, in characters.
pub const TITLE_MIN_LEN: usize = 3;

/// Title used when nothing usable can be derived.
pub const DEFAULT_TITLE: &str = "New Note";

// =============================================================================
// FALLBACK NOTES
// =============================================================================

pub const SUMMARY_FALLBACK_NOTE: &str = "Using fallback summary due to AI service issue";
pub const IMPROVE_FALLBACK_NOTE: &str = "Using fallback improvement due to AI service issue";
pub const TAGS_FALLBACK_NOTE: &str = "Using fallback tags due to AI service issue";
pub const TITLE_FALLBACK_NOTE: &str = "Using fallback title due to AI service issue";
