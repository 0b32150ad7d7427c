//! OpenAI-compatible provider client.
//!
//! Works with any endpoint that implements `POST /chat/completions`:
//!
//! - OpenAI cloud API
//! - Azure OpenAI
//! - Ollama (in OpenAI compatibility mode)
//! - vLLM, LocalAI, LM Studio
//!
//! # Example
//!
//! ```rust,no_run
//! use notewise_inference::openai::{OpenAIBackend, OpenAIConfig};
//! use notewise_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = OpenAIBackend::new(OpenAIConfig {
//!         api_key: Some("sk-...".to_string()),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//!     let reply = backend.generate("Say hello", 10).await;
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{OpenAIBackend, OpenAIConfig};
pub use error::{classify_failure, status_error};
pub use types::*;
