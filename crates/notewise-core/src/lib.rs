//! # notewise-core
//!
//! Core types, traits, and error taxonomy for the notewise content-derivation
//! pipeline.
//!
//! This crate provides the value objects passed between a caller and the
//! derivation orchestrator, the provider failure taxonomy, the structured logging field names, and the
//! [`GenerationBackend`] trait that provider clients implement.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, FailureKind, ProviderError, ProviderResult, Result};
pub use models::*;
pub use traits::*;
