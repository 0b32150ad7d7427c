//! Derivation orchestrator.
//!
//! Each operation makes at most one provider call. Any failure along the
//! provider path (credentials, transport, status, empty or unparseable reply)
//! is absorbed here and replaced by the matching local heuristic, so callers
//! always receive a [`DerivationResult`].

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use notewise_core::defaults::PROBE_MAX_TOKENS;
use notewise_core::logging;
use notewise_core::{
    DerivationRequest, DerivationResult, GenerationBackend, Operation, Payload, ProviderError,
    ProviderHealth,
};

use crate::fallback::{self, StopwordSet};
use crate::parse::{self, ParseFailure};
use crate::prompts;

/// Why the provider path was abandoned.
#[derive(Debug, Error)]
enum Degradation {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl Degradation {
    fn label(&self) -> &'static str {
        match self {
            Degradation::Provider(e) => e.label(),
            Degradation::Parse(_) => "parse_failure",
        }
    }
}

/// Turns note content into summaries, improved text, tags and titles.
pub struct Deriver<B> {
    backend: B,
    stopwords: Arc<StopwordSet>,
}

impl<B: GenerationBackend> Deriver<B> {
    /// Create a deriver using the shared English stopword set.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stopwords: StopwordSet::english(),
        }
    }

    /// Replace the stopword set used by the tag heuristic.
    pub fn with_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn summarize(&self, request: &DerivationRequest) -> DerivationResult {
        self.derive(Operation::Summarize, request).await
    }

    pub async fn improve(&self, request: &DerivationRequest) -> DerivationResult {
        self.derive(Operation::Improve, request).await
    }

    pub async fn tags(&self, request: &DerivationRequest) -> DerivationResult {
        self.derive(Operation::Tags, request).await
    }

    pub async fn title(&self, request: &DerivationRequest) -> DerivationResult {
        self.derive(Operation::Title, request).await
    }

    /// Derive `op` from `request`. Never fails.
    #[instrument(
        skip(self, op, request),
        fields(
            { logging::COMPONENT } = "deriver",
            { logging::OPERATION } = %op,
            { logging::MODEL } = %self.backend.model_name(),
            { logging::CONTENT_LEN } = request.content().len(),
        )
    )]
    pub async fn derive(&self, op: Operation, request: &DerivationRequest) -> DerivationResult {
        let start = Instant::now();

        match self.attempt(op, request).await {
            Ok(payload) => {
                debug!(
                    { logging::ORIGIN } = "provider",
                    { logging::DURATION_MS } = start.elapsed().as_millis() as u64,
                    "Derivation complete"
                );
                DerivationResult::provider(payload)
            }
            Err(reason) => {
                warn!(
                    { logging::ORIGIN } = "fallback",
                    { logging::FAILURE_KIND } = reason.label(),
                    { logging::ERROR_MSG } = %reason,
                    { logging::DURATION_MS } = start.elapsed().as_millis() as u64,
                    "Provider derivation failed, using fallback"
                );
                DerivationResult::fallback(
                    fallback::derive(op, request, &self.stopwords),
                    op.fallback_note(),
                )
            }
        }
    }

    /// The provider path: prompt, one call, post-processing.
    async fn attempt(
        &self,
        op: Operation,
        request: &DerivationRequest,
    ) -> Result<Payload, Degradation> {
        let prompt = prompts::for_operation(op, request);
        let reply = self.backend.generate(&prompt, op.max_tokens()).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(ProviderError::EmptyReply.into());
        }

        let payload = match op {
            Operation::Summarize => Payload::Summary(reply.to_string()),
            Operation::Improve => Payload::ImprovedText(reply.to_string()),
            Operation::Tags => Payload::Tags(parse::parse_tags(reply)?),
            Operation::Title => {
                let title = parse::clean_title(reply);
                if title.is_empty() {
                    return Err(ProviderError::EmptyReply.into());
                }
                Payload::Title(title)
            }
        };
        Ok(payload)
    }

    /// Check whether derivations currently reach the provider.
    #[instrument(
        skip(self),
        fields(
            { logging::COMPONENT } = "deriver",
            { logging::OPERATION } = "probe",
            { logging::MODEL } = %self.backend.model_name(),
        )
    )]
    pub async fn probe(&self) -> ProviderHealth {
        match self
            .backend
            .generate(prompts::PROBE_PROMPT, PROBE_MAX_TOKENS)
            .await
        {
            Ok(_) => ProviderHealth::Healthy,
            Err(e) => {
                warn!(
                    { logging::FAILURE_KIND } = e.label(),
                    { logging::ERROR_MSG } = %e,
                    "Provider probe failed"
                );
                ProviderHealth::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }
}
