//! # notewise-inference
//!
//! Content-derivation pipeline for notewise.
//!
//! This crate provides:
//! - An OpenAI-compatible provider client ([`OpenAIBackend`])
//! - Prompt templates per derivation operation
//! - A two-stage parser for tag replies
//! - Deterministic fallbacks for summaries, improvements, tags, and titles
//! - The [`Deriver`] orchestrator that ties them together
//!
//! # Example
//!
//! ```rust,no_run
//! use notewise_inference::{DerivationRequest, Deriver, OpenAIBackend};
//!
//! #[tokio::main]
//! async fn main() {
//!     let deriver = Deriver::new(OpenAIBackend::from_env().unwrap());
//!     let request = DerivationRequest::new("Meeting notes. We agreed to ship on Friday.").unwrap();
//!
//!     let result = deriver.summarize(&request).await;
//!     println!("{} ({})", result.payload().as_text().unwrap(), result.origin());
//! }
//! ```

pub mod derive;
pub mod fallback;
pub mod openai;
pub mod parse;
pub mod prompts;

// Mock generation backend for testing
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use notewise_core::*;

pub use derive::Deriver;
pub use fallback::{StopwordSet, WordFrequencyTable};
pub use openai::{OpenAIBackend, OpenAIConfig};
pub use parse::{clean_title, parse_tags, ParseFailure};
