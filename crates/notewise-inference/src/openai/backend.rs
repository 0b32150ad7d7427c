//! OpenAI-compatible provider client implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

use notewise_core::defaults::{GEN_MODEL, PLACEHOLDER_API_KEY, PROVIDER_URL, TEMPERATURE};
use notewise_core::logging;
use notewise_core::{Error, GenerationBackend, ProviderError, ProviderResult, Result};

use super::error::status_error;
use super::types::*;

/// Configuration for the OpenAI-compatible provider client.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key. Absent, blank and placeholder keys all mean "unavailable".
    pub api_key: Option<String>,
    /// Model to use for generation.
    pub gen_model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Client-side request timeout. None leaves deadlines to the caller.
    pub timeout_seconds: Option<u64>,
    /// Skip TLS verification (for self-signed certs in local environments).
    pub skip_tls_verify: bool,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: PROVIDER_URL.to_string(),
            api_key: None,
            gen_model: GEN_MODEL.to_string(),
            temperature: TEMPERATURE,
            timeout_seconds: None,
            skip_tls_verify: false,
        }
    }
}

impl OpenAIConfig {
    /// Read configuration from `OPENAI_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| PROVIDER_URL.to_string()),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            gen_model: std::env::var("OPENAI_GEN_MODEL").unwrap_or_else(|_| GEN_MODEL.to_string()),
            temperature: std::env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(TEMPERATURE),
            timeout_seconds: std::env::var("OPENAI_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok()),
            skip_tls_verify: std::env::var("OPENAI_SKIP_TLS_VERIFY")
                .map(|v| v == "1" || v.to_lowercase() == "true")
                .unwrap_or(false),
        }
    }

    /// The API key, unless it is missing, blank or the shipped placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}

/// OpenAI-compatible provider client.
pub struct OpenAIBackend {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: OpenAIConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        if config.skip_tls_verify {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            { logging::BASE_URL } = %config.base_url,
            { logging::MODEL } = %config.gen_model,
            { logging::CREDENTIALS } = config.usable_api_key().is_some(),
            "Initializing OpenAI backend"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(OpenAIConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    #[instrument(
        skip(self, prompt),
        fields(
            { logging::COMPONENT } = "openai",
            { logging::OPERATION } = "generate",
            { logging::MODEL } = %self.config.gen_model,
            { logging::PROMPT_LEN } = prompt.len(),
        )
    )]
    async fn generate(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String> {
        let api_key = self.config.usable_api_key().ok_or_else(|| {
            ProviderError::Unavailable("OpenAI API key not configured".to_string())
        })?;

        let request = ChatCompletionRequest {
            model: self.config.gen_model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.endpoint("/chat/completions"))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!({ logging::STATUS } = status.as_u16(), "Provider returned error status");
            let body = response.json::<OpenAIErrorResponse>().await.ok();
            return Err(status_error(status.as_u16(), body));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(ProviderError::EmptyReply);
        }

        debug!({ logging::RESPONSE_LEN } = content.len(), "Generation complete");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.gen_model
    }
}
