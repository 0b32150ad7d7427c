//! Trait definitions for pluggable provider clients.

use async_trait::async_trait;

use crate::error::ProviderResult;

// =============================================================================
// GENERATION TRAITS
// =============================================================================

/// Client for an external text-generation provider.
///
/// One call is one outbound request. Implementations do not retry.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text for `prompt` within `max_tokens`.
    ///
    /// Returns the reply trimmed of surrounding whitespace, never empty.
    async fn generate(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
