//! Shared helpers for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use notetag_api::{router, ApiConfig, AppState, TagGenerator};
use notetag_core::{NoteRepository, RawClassification};
use notetag_db::MemoryNoteRepository;
use notetag_inference::MockClassificationBackend;

/// Classifier output used across tests: one strong label, one weak.
pub fn ml_results() -> Vec<RawClassification> {
    vec![
        RawClassification::new("entertainment", 0.3),
        RawClassification::new("tech_and_science", 0.95),
    ]
}

pub fn test_app(backend: MockClassificationBackend) -> (Router, MemoryNoteRepository) {
    test_app_with_config(backend, ApiConfig::default())
}

pub fn test_app_with_config(
    backend: MockClassificationBackend,
    config: ApiConfig,
) -> (Router, MemoryNoteRepository) {
    let store = MemoryNoteRepository::new();
    let state = AppState::new(
        Arc::new(store.clone()),
        TagGenerator::new(Arc::new(backend)),
        config,
    );
    (router(state), store)
}

/// Router over a caller-supplied store.
pub fn test_app_with_store(
    backend: MockClassificationBackend,
    store: Arc<dyn NoteRepository>,
) -> Router {
    router(AppState::new(
        store,
        TagGenerator::new(Arc::new(backend)),
        ApiConfig::default(),
    ))
}

/// Send raw bytes with a JSON content type.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    decode(app.clone().oneshot(request).await.expect("Request failed")).await
}

async fn decode(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not JSON")
    };
    (status, json)
}

/// Send a request and decode the JSON response body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Request failed");
    decode(response).await
}
