//! Error types for notewise.

use std::fmt;
use thiserror::Error;

/// Result type alias using notewise's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for provider client calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Core error type for notewise operations.
///
/// Derivations never return this type: provider failures are absorbed by the
/// orchestrator. It covers configuration, caller contract violations and I/O
/// at the edges of the pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input (e.g. empty content)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Provider call failed outside a derivation
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Classification of a non-success provider response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Invalid authentication credentials.
    Authentication,
    /// Quota or rate limit exceeded.
    RateLimited,
    /// Model not found or not available.
    ModelNotFound,
    /// Prompt plus budget exceeds the model context.
    ContextLengthExceeded,
    /// Server-side error.
    Server,
    /// Anything else.
    Unknown,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::RateLimited => "rate_limited",
            Self::ModelNotFound => "model_not_found",
            Self::ContextLengthExceeded => "context_length_exceeded",
            Self::Server => "server",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single provider call.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// No credential, or the known placeholder credential. No request was sent.
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with a non-success status.
    #[error("Provider returned {status}: {message}")]
    Status {
        status: u16,
        kind: FailureKind,
        message: String,
    },

    /// Reply decoded but carried no usable text.
    #[error("Provider reply contained no text")]
    EmptyReply,

    /// Reply body could not be decoded.
    #[error("Malformed provider reply: {0}")]
    Malformed(String),

    /// Request could not be completed (connect, timeout, TLS).
    #[error("Provider request failed: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Short label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "unavailable",
            Self::Status { kind, .. } => kind.as_str(),
            Self::EmptyReply => "empty_reply",
            Self::Malformed(_) => "malformed",
            Self::Transport(_) => "transport",
        }
    }
}
