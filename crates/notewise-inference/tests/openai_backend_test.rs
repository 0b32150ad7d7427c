//! Wire-level tests for the OpenAI-compatible provider client.

use notewise_core::defaults::PLACEHOLDER_API_KEY;
use notewise_core::{FailureKind, GenerationBackend, ProviderError};
use notewise_inference::openai::{OpenAIBackend, OpenAIConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(base_url: String, api_key: Option<&str>) -> OpenAIBackend {
    OpenAIBackend::new(OpenAIConfig {
        base_url,
        api_key: api_key.map(str::to_string),
        gen_model: "test-model".to_string(),
        ..Default::default()
    })
    .expect("Failed to create backend")
}

fn chat_reply(content: serde_json::Value) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 9, "completion_tokens": 3, "total_tokens": 12}
    })
}

#[tokio::test]
async fn test_generate_sends_chat_completion_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "messages": [{"role": "user", "content": "Say hi"}],
            "max_tokens": 42,
            "temperature": 0.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!("  Hi there!  "))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reply = backend(mock_server.uri(), Some("test-key"))
        .generate("Say hi", 42)
        .await
        .expect("generation should succeed");

    assert_eq!(reply, "Hi there!");
}

#[tokio::test]
async fn test_status_error_carries_remote_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {
                "message": "Rate limit reached for requests",
                "type": "requests",
                "code": "rate_limit_exceeded"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some("test-key"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    match err {
        ProviderError::Status {
            status,
            kind,
            message,
        } => {
            assert_eq!(status, 429);
            assert_eq!(kind, FailureKind::RateLimited);
            assert_eq!(message, "Rate limit reached for requests");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_status_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some("test-key"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ProviderError::Status {
            status: 502,
            kind: FailureKind::Server,
            ..
        }
    ));
    assert!(err.to_string().contains("Unknown error"));
}

#[tokio::test]
async fn test_invalid_key_is_authentication_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}
        })))
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some("sk-wrong"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert_eq!(err.label(), "authentication");
}

#[tokio::test]
async fn test_empty_choices_is_empty_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "x", "choices": []})))
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some("test-key"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::EmptyReply));
}

#[tokio::test]
async fn test_null_and_blank_content_are_empty_replies() {
    for content in [json!(null), json!("   \n ")] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(content)))
            .mount(&mock_server)
            .await;

        let err = backend(mock_server.uri(), Some("test-key"))
            .generate("prompt", 10)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::EmptyReply));
    }
}

#[tokio::test]
async fn test_undecodable_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some("test-key"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Malformed(_)));
}

#[tokio::test]
async fn test_missing_key_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!("unused"))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), None)
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Unavailable(_)));
}

#[tokio::test]
async fn test_placeholder_key_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply(json!("unused"))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = backend(mock_server.uri(), Some(PLACEHOLDER_API_KEY))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Unavailable(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    // Nothing listens on the discard port.
    let err = backend("http://127.0.0.1:9".to_string(), Some("test-key"))
        .generate("prompt", 10)
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Transport(_)));
}
