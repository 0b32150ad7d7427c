//! Mapping of OpenAI error responses onto the provider failure taxonomy.

use notewise_core::{FailureKind, ProviderError};

use super::types::OpenAIErrorResponse;

/// Classify a failure from HTTP status and the remote error type/code.
pub fn classify_failure(status: u16, error_type: &str) -> FailureKind {
    match (status, error_type) {
        (401, _) | (403, _) => FailureKind::Authentication,
        (429, _) | (_, "insufficient_quota") => FailureKind::RateLimited,
        (404, _) | (_, "model_not_found") => FailureKind::ModelNotFound,
        (400, _) if error_type.contains("context_length") => FailureKind::ContextLengthExceeded,
        (500..=599, _) => FailureKind::Server,
        _ => FailureKind::Unknown,
    }
}

/// Build the error for a non-success response.
///
/// `body` is the decoded error document if the provider sent one.
pub fn status_error(status: u16, body: Option<OpenAIErrorResponse>) -> ProviderError {
    let (message, error_type) = match body {
        Some(body) => {
            let error_type = body.error.code.or(body.error.error_type).unwrap_or_default();
            (body.error.message, error_type)
        }
        None => (None, String::new()),
    };

    ProviderError::Status {
        status,
        kind: classify_failure(status, &error_type),
        message: message.unwrap_or_else(|| "Unknown error".to_string()),
    }
}
