//! Request-scoped value objects exchanged with the derivation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::error::{Error, Result};

// =============================================================================
// OPERATIONS
// =============================================================================

/// Kind of artifact derived from note content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Summarize,
    Improve,
    Tags,
    Title,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Summarize,
        Operation::Improve,
        Operation::Tags,
        Operation::Title,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Improve => "improve",
            Operation::Tags => "tags",
            Operation::Title => "title",
        }
    }

    /// Token budget sent to the provider for this operation.
    pub fn max_tokens(&self) -> u32 {
        match self {
            Operation::Summarize => defaults::SUMMARY_MAX_TOKENS,
            Operation::Improve => defaults::IMPROVE_MAX_TOKENS,
            Operation::Tags => defaults::TAGS_MAX_TOKENS,
            Operation::Title => defaults::TITLE_MAX_TOKENS,
        }
    }

    /// Note attached to results produced by this operation's fallback.
    pub fn fallback_note(&self) -> &'static str {
        match self {
            Operation::Summarize => defaults::SUMMARY_FALLBACK_NOTE,
            Operation::Improve => defaults::IMPROVE_FALLBACK_NOTE,
            Operation::Tags => defaults::TAGS_FALLBACK_NOTE,
            Operation::Title => defaults::TITLE_FALLBACK_NOTE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "summarize" | "summary" => Ok(Operation::Summarize),
            "improve" => Ok(Operation::Improve),
            "tags" | "generate-tags" => Ok(Operation::Tags),
            "title" | "generate-title" => Ok(Operation::Title),
            _ => Err(Error::InvalidInput(format!("Unknown operation: {}", s))),
        }
    }
}

// =============================================================================
// REQUEST
// =============================================================================

/// Input to a derivation. Never persisted by the pipeline.
///
/// Content always has visible text; deserialization runs the same check as
/// [`DerivationRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct DerivationRequest {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

/// Wire form of a request before validation.
#[derive(Deserialize)]
struct RawRequest {
    content: String,
    #[serde(default)]
    title: Option<String>,
}

impl TryFrom<RawRequest> for DerivationRequest {
    type Error = Error;

    fn try_from(raw: RawRequest) -> Result<Self> {
        let request = Self::new(raw.content)?;
        Ok(match raw.title {
            Some(title) => request.with_title(title),
            None => request,
        })
    }
}

impl DerivationRequest {
    /// Build a request, rejecting content with no visible text.
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(Error::InvalidInput("Content is required".to_string()));
        }
        Ok(Self {
            content,
            title: None,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Optional title, used as extra context for tags.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// The derived artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    Summary(String),
    ImprovedText(String),
    Tags(Vec<String>),
    Title(String),
}

impl Payload {
    /// Operation that produces this payload.
    pub fn operation(&self) -> Operation {
        match self {
            Payload::Summary(_) => Operation::Summarize,
            Payload::ImprovedText(_) => Operation::Improve,
            Payload::Tags(_) => Operation::Tags,
            Payload::Title(_) => Operation::Title,
        }
    }

    /// Text of a summary, improved text or title payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Summary(s) | Payload::ImprovedText(s) | Payload::Title(s) => Some(s),
            Payload::Tags(_) => None,
        }
    }

    pub fn as_tags(&self) -> Option<&[String]> {
        match self {
            Payload::Tags(tags) => Some(tags),
            _ => None,
        }
    }
}

/// Where a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Provider,
    Fallback,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Provider => "provider",
            Origin::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a derivation.
///
/// A fallback result always carries a note; a provider result never does.
/// Serializes as `{"origin": "...", "<payload key>": ..., "note"?: "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum DerivationResult {
    Provider {
        #[serde(flatten)]
        payload: Payload,
    },
    Fallback {
        #[serde(flatten)]
        payload: Payload,
        note: String,
    },
}

impl DerivationResult {
    pub fn provider(payload: Payload) -> Self {
        DerivationResult::Provider { payload }
    }

    pub fn fallback(payload: Payload, note: impl Into<String>) -> Self {
        DerivationResult::Fallback {
            payload,
            note: note.into(),
        }
    }

    pub fn payload(&self) -> &Payload {
        match self {
            DerivationResult::Provider { payload } | DerivationResult::Fallback { payload, .. } => {
                payload
            }
        }
    }

    pub fn origin(&self) -> Origin {
        match self {
            DerivationResult::Provider { .. } => Origin::Provider,
            DerivationResult::Fallback { .. } => Origin::Fallback,
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            DerivationResult::Provider { .. } => None,
            DerivationResult::Fallback { note, .. } => Some(note),
        }
    }
}

// =============================================================================
// HEALTH
// =============================================================================

/// Reachability of the generation provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProviderHealth {
    Healthy,
    /// Derivations will use fallbacks until the provider recovers.
    Degraded { reason: String },
}

impl ProviderHealth {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProviderHealth::Healthy)
    }
}
