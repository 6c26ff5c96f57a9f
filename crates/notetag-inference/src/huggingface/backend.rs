//! Hugging Face Inference API backend implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use notetag_core::{
    defaults, ClassificationBackend, ClassificationError, Error, RawClassification, Result,
};

use super::error::{transport_error, HfErrorCode};
use super::types::*;

/// Configuration for the Hugging Face backend.
#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// Access token. Requests are sent unauthenticated when absent and the
    /// upstream rejection surfaces as an invalid-credentials failure.
    pub api_key: Option<String>,
    /// Text-classification model id.
    pub model: String,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::HF_API_URL.to_string(),
            api_key: None,
            model: defaults::CLASSIFICATION_MODEL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl HuggingFaceConfig {
    /// Read configuration from `HF_API_KEY`, `HF_API_URL`, `HF_MODEL` and
    /// `HF_TIMEOUT`.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("HF_API_URL")
                .unwrap_or_else(|_| defaults::HF_API_URL.to_string()),
            api_key: std::env::var("HF_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: std::env::var("HF_MODEL")
                .unwrap_or_else(|_| defaults::CLASSIFICATION_MODEL.to_string()),
            timeout_seconds: std::env::var("HF_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full URL of the model endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Hugging Face text-classification backend.
pub struct HuggingFaceBackend {
    client: Client,
    config: HuggingFaceConfig,
}

impl HuggingFaceBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: HuggingFaceConfig) -> Result<Self> {
        let mut client_builder = Client::builder();

        if let Some(secs) = config.timeout_seconds {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        let client = client_builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "inference",
            component = "huggingface",
            url = %config.base_url,
            model = %config.model,
            authenticated = config.has_api_key(),
            "Initializing Hugging Face backend"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(HuggingFaceConfig::from_env())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &HuggingFaceConfig {
        &self.config
    }

    /// Build a request with authentication if configured.
    fn build_request(&self) -> reqwest::RequestBuilder {
        let mut req = self.client.post(self.config.endpoint());

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }
}

#[async_trait]
impl ClassificationBackend for HuggingFaceBackend {
    async fn classify(&self, text: &str) -> Result<Vec<RawClassification>> {
        let start = Instant::now();
        debug!(
            subsystem = "inference",
            component = "huggingface",
            op = "classify",
            model = %self.config.model,
            input_len = text.chars().count(),
            "Classifying text"
        );

        let response = self
            .build_request()
            .json(&ClassificationRequest { inputs: text })
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<HfErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        status.to_string()
                    } else {
                        body
                    }
                });
            let err =
                HfErrorCode::from_status(status.as_u16()).into_error(status.as_u16(), &message);
            warn!(
                subsystem = "inference",
                component = "huggingface",
                op = "classify",
                status = status.as_u16(),
                error_kind = %err.kind,
                error = %err.message,
                "Classification request rejected"
            );
            return Err(err.into());
        }

        let bytes = response.bytes().await.map_err(|e| transport_error(&e))?;
        let parsed: ClassificationResponse = serde_json::from_slice(&bytes).map_err(|e| {
            ClassificationError::other(format!("Failed to parse response: {}", e))
        })?;
        let results = parsed.into_raw();

        debug!(
            subsystem = "inference",
            component = "huggingface",
            op = "classify",
            result_count = results.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Classification complete"
        );
        Ok(results)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HuggingFaceConfig::default();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
        assert_eq!(config.model, "cardiffnlp/tweet-topic-21-multi");
        assert!(config.api_key.is_none());
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = HuggingFaceConfig {
            base_url: "http://localhost:8080/".to_string(),
            model: "org/model".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://localhost:8080/models/org/model");
    }

    #[test]
    fn test_backend_model_name() {
        let backend = HuggingFaceBackend::new(HuggingFaceConfig::default()).unwrap();
        assert_eq!(backend.model_name(), "cardiffnlp/tweet-topic-21-multi");
        assert!(!backend.config().has_api_key());
    }
}
