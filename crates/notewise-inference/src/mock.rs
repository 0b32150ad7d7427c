//! Mock generation backend for deterministic orchestrator tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let backend = MockGenerationBackend::new().with_fixed_response("A summary");
//! let deriver = Deriver::new(backend.clone());
//! let result = deriver.summarize(&request).await;
//! assert_eq!(backend.generate_call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use notewise_core::{GenerationBackend, ProviderError, ProviderResult};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    fixed_responses: HashMap<String, String>,
    default_response: ProviderResult<String>,
}

#[derive(Debug, Clone)]
pub struct MockCall {
    pub prompt: String,
    pub max_tokens: u32,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            fixed_responses: HashMap::new(),
            default_response: Ok("Mock response".to_string()),
        }
    }
}

impl MockGenerationBackend {
    /// Create a new mock backend that answers "Mock response".
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a fixed reply for generation requests.
    ///
    /// The reply is returned as-is, so tests can feed whitespace or empty
    /// text through the orchestrator.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).default_response = Ok(response.into());
        self
    }

    /// Fail every request that has no mapped response.
    pub fn with_failure(mut self, error: ProviderError) -> Self {
        Arc::make_mut(&mut self.config).default_response = Err(error);
        self
    }

    /// Add a reply for one exact prompt.
    pub fn with_response_mapping(
        mut self,
        prompt: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Arc::make_mut(&mut self.config)
            .fixed_responses
            .insert(prompt.into(), output.into());
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Get number of generation calls.
    pub fn generate_call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> ProviderResult<String> {
        self.call_log.lock().unwrap().push(MockCall {
            prompt: prompt.to_string(),
            max_tokens,
        });

        if let Some(response) = self.config.fixed_responses.get(prompt) {
            return Ok(response.clone());
        }
        self.config.default_response.clone()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response() {
        let backend = MockGenerationBackend::new();
        assert_eq!(backend.generate("hi", 5).await.unwrap(), "Mock response");
        assert_eq!(backend.generate_call_count(), 1);
        assert_eq!(backend.get_calls()[0].max_tokens, 5);
    }

    #[tokio::test]
    async fn test_mock_mapping_and_failure() {
        let backend = MockGenerationBackend::new()
            .with_failure(ProviderError::EmptyReply)
            .with_response_mapping("known", "mapped");

        assert_eq!(backend.generate("known", 1).await.unwrap(), "mapped");
        assert!(matches!(
            backend.generate("other", 1).await,
            Err(ProviderError::EmptyReply)
        ));
        assert_eq!(backend.generate_call_count(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_call_log() {
        let backend = MockGenerationBackend::new();
        let clone = backend.clone();
        clone.generate("x", 1).await.unwrap();
        assert_eq!(backend.generate_call_count(), 1);
    }
}
