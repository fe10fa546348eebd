//! Integration tests for the vision client HTTP contract
//!
//! These tests use wiremock to simulate OpenAI-compatible chat completion
//! endpoints, covering the happy path, API error bodies, bare HTTP errors,
//! and empty replies.

use pagespace_vision_engine::{image_data_url, VisionClient, VisionConfig, VisionError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: String) -> VisionConfig {
    VisionConfig {
        api_key: "sk-test".to_string(),
        api_base_url: base_url,
        ..VisionConfig::default()
    }
}

fn png_data_url() -> String {
    image_data_url(&[0x89, 0x50, 0x4e, 0x47], "image/png")
}

#[tokio::test]
async fn test_describe_design_returns_reply_content() {
    let server = MockServer::start().await;

    let response_json = serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": "[{\"type\":\"container\"}]" },
                "finish_reason": "stop"
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .and(body_partial_json(serde_json::json!({
            "model": "gpt-4o",
            "temperature": 0.1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_json))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(server.uri())).unwrap();
    let reply = client.describe_design(&png_data_url()).await.unwrap();

    assert_eq!(reply, "[{\"type\":\"container\"}]");
}

#[tokio::test]
async fn test_describe_design_trims_trailing_slash_in_base_url() {
    let server = MockServer::start().await;

    let response_json = serde_json::json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "[]" } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_json))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(format!("{}/", server.uri()))).unwrap();
    let reply = client.describe_design(&png_data_url()).await.unwrap();

    assert_eq!(reply, "[]");
}

#[tokio::test]
async fn test_describe_design_surfaces_server_error_message() {
    let server = MockServer::start().await;

    let error_json = serde_json::json!({
        "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_json))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(server.uri())).unwrap();
    let err = client.describe_design(&png_data_url()).await.unwrap_err();

    match err {
        VisionError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_describe_design_falls_back_to_status_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream offline"))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(server.uri())).unwrap();
    let err = client.describe_design(&png_data_url()).await.unwrap_err();

    match err {
        VisionError::ApiError { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("503"), "message was: {message}");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_describe_design_rejects_empty_content() {
    let server = MockServer::start().await;

    let response_json = serde_json::json!({
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": "" } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response_json))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(server.uri())).unwrap();
    let err = client.describe_design(&png_data_url()).await.unwrap_err();

    assert!(matches!(err, VisionError::EmptyResponse));
}

#[tokio::test]
async fn test_describe_design_rejects_missing_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = VisionClient::new(test_config(server.uri())).unwrap();
    let err = client.describe_design(&png_data_url()).await.unwrap_err();

    assert!(matches!(err, VisionError::EmptyResponse));
}
