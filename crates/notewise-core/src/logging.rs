//! Structured logging schema and field name constants for notewise.
//!
//! Every span and event in the pipeline names its fields through these
//! constants (`{ logging::OPERATION } = %op`), so log queries can rely on
//! one vocabulary across the orchestrator, the provider client and the CLI.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Unused by the library; derivations never fail |
//! | WARN  | Provider path abandoned, fallback applied; probe degraded |
//! | INFO  | Lifecycle events (backend initialisation), CLI completions |
//! | DEBUG | Decision points: provider success, parse strategy, error statuses |
//! | TRACE | Unused |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Component emitting the event.
/// Values: "deriver", "openai"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Values: "summarize", "improve", "tags", "title", "probe", "generate"
pub const OPERATION: &str = "op";

// ─── Inference fields ──────────────────────────────────────────────────────

/// Generation model name.
pub const MODEL: &str = "model";

/// Provider API root.
pub const BASE_URL: &str = "base_url";

/// Whether a usable API key is configured.
pub const CREDENTIALS: &str = "credentials";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Byte length of the note content.
pub const CONTENT_LEN: &str = "content_len";

/// Byte length of a prompt.
pub const PROMPT_LEN: &str = "prompt_len";

/// Byte length of a model response.
pub const RESPONSE_LEN: &str = "response_len";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of tags extracted from a reply.
pub const TAG_COUNT: &str = "tag_count";

/// Tag reply strategy: "bracketed" or "delimited".
pub const PARSE_STRATEGY: &str = "parse_strategy";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Result origin: "provider" or "fallback".
pub const ORIGIN: &str = "origin";

/// HTTP status returned by the provider.
pub const STATUS: &str = "status";

/// Provider failure label, e.g. "rate_limited", "parse_failure".
pub const FAILURE_KIND: &str = "failure_kind";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
