//! Hugging Face backend tests against a mock HTTP server.

use notetag_core::{ClassificationBackend, ClassificationErrorKind, RawClassification};
use notetag_inference::{HuggingFaceBackend, HuggingFaceConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "cardiffnlp/tweet-topic-21-multi";
const MODEL_PATH: &str = "/models/cardiffnlp/tweet-topic-21-multi";

fn backend_for(server: &MockServer, api_key: Option<&str>) -> HuggingFaceBackend {
    let config = HuggingFaceConfig {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        model: MODEL.to_string(),
        timeout_seconds: Some(5),
    };
    HuggingFaceBackend::new(config).expect("Failed to create backend")
}

async fn kind_for_status(status: u16) -> ClassificationErrorKind {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({"error": "nope"})),
        )
        .mount(&server)
        .await;

    backend_for(&server, Some("hf_test"))
        .classify("some text")
        .await
        .unwrap_err()
        .classification_kind()
        .expect("gateway failures carry a kind")
}

#[tokio::test]
async fn test_classify_sends_inputs_and_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("Authorization", "Bearer hf_test"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"inputs": "I love machine learning"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([[
            {"label": "tech_and_science", "score": 0.95},
            {"label": "learning_and_educational", "score": 0.3}
        ]])))
        .expect(1)
        .mount(&server)
        .await;

    let raw = backend_for(&server, Some("hf_test"))
        .classify("I love machine learning")
        .await
        .unwrap();

    assert_eq!(
        raw,
        vec![
            RawClassification::new("tech_and_science", 0.95),
            RawClassification::new("learning_and_educational", 0.3),
        ]
    );
}

#[tokio::test]
async fn test_classify_accepts_flat_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"label": "sports", "score": 0.7}
        ])))
        .mount(&server)
        .await;

    let raw = backend_for(&server, None).classify("goal!").await.unwrap();
    assert_eq!(raw, vec![RawClassification::new("sports", 0.7)]);
}

#[tokio::test]
async fn test_classify_accepts_single_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"label": "gaming", "score": 0.4})),
        )
        .mount(&server)
        .await;

    let raw = backend_for(&server, None).classify("gg").await.unwrap();
    assert_eq!(raw, vec![RawClassification::new("gaming", 0.4)]);
}

#[tokio::test]
async fn test_unauthorized_is_invalid_credentials() {
    assert_eq!(
        kind_for_status(401).await,
        ClassificationErrorKind::InvalidCredentials
    );
    assert_eq!(
        kind_for_status(403).await,
        ClassificationErrorKind::InvalidCredentials
    );
}

#[tokio::test]
async fn test_overload_is_unavailable() {
    assert_eq!(kind_for_status(503).await, ClassificationErrorKind::Unavailable);
    assert_eq!(kind_for_status(429).await, ClassificationErrorKind::Unavailable);
}

#[tokio::test]
async fn test_server_error_is_other() {
    assert_eq!(kind_for_status(500).await, ClassificationErrorKind::Other);
    assert_eq!(kind_for_status(404).await, ClassificationErrorKind::Other);
}

#[tokio::test]
async fn test_error_message_carries_upstream_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Invalid credentials in Authorization header"
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server, Some("hf_bad"))
        .classify("text")
        .await
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid credentials in Authorization header"));
}

#[tokio::test]
async fn test_undecodable_body_is_other() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = backend_for(&server, None).classify("text").await.unwrap_err();
    assert_eq!(err.classification_kind(), Some(ClassificationErrorKind::Other));
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    let config = HuggingFaceConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: Some(5),
        ..Default::default()
    };
    let backend = HuggingFaceBackend::new(config).unwrap();

    let err = backend.classify("text").await.unwrap_err();
    assert_eq!(
        err.classification_kind(),
        Some(ClassificationErrorKind::Unavailable)
    );
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = HuggingFaceConfig {
        base_url: server.uri(),
        timeout_seconds: Some(1),
        ..Default::default()
    };
    let backend = HuggingFaceBackend::new(config).unwrap();

    let err = backend.classify("text").await.unwrap_err();
    assert_eq!(
        err.classification_kind(),
        Some(ClassificationErrorKind::Unavailable)
    );
}
