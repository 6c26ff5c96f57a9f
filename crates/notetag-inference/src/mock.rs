//! Mock classification backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notetag_core::{ClassificationBackend, ClassificationErrorKind, RawClassification};
//! use notetag_inference::mock::MockClassificationBackend;
//!
//! # async fn demo() {
//! let backend = MockClassificationBackend::new()
//!     .with_results(vec![RawClassification::new("music", 0.8)]);
//! let raw = backend.classify("a song").await.unwrap();
//! assert_eq!(raw.len(), 1);
//!
//! let failing = MockClassificationBackend::new()
//!     .with_failure(ClassificationErrorKind::Unavailable);
//! assert!(failing.classify("a song").await.is_err());
//! # }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notetag_core::{
    ClassificationBackend, ClassificationError, ClassificationErrorKind, RawClassification,
    Result,
};

/// Mock classification backend for testing.
#[derive(Clone)]
pub struct MockClassificationBackend {
    config: Arc<MockConfig>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    model: String,
    results: Vec<RawClassification>,
    failure: Option<ClassificationErrorKind>,
}

/// A recorded `classify` invocation.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub input: String,
    pub timestamp: std::time::Instant,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            model: "mock-classifier".to_string(),
            results: Vec::new(),
            failure: None,
        }
    }
}

impl Default for MockClassificationBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassificationBackend {
    /// Create a mock that returns no labels.
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return these raw classifications for every call.
    pub fn with_results(mut self, results: Vec<RawClassification>) -> Self {
        Arc::make_mut(&mut self.config).results = results;
        self
    }

    /// Fail every call with the given kind.
    pub fn with_failure(mut self, kind: ClassificationErrorKind) -> Self {
        Arc::make_mut(&mut self.config).failure = Some(kind);
        self
    }

    /// Set the reported model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).model = model.into();
        self
    }

    /// Get all logged calls for assertion.
    pub fn get_calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of `classify` calls made.
    pub fn classify_call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    fn log_call(&self, input: &str) {
        self.call_log.lock().unwrap().push(MockCall {
            input: input.to_string(),
            timestamp: std::time::Instant::now(),
        });
    }
}

#[async_trait]
impl ClassificationBackend for MockClassificationBackend {
    async fn classify(&self, text: &str) -> Result<Vec<RawClassification>> {
        self.log_call(text);

        if let Some(kind) = self.config.failure {
            return Err(ClassificationError::new(kind, "mock failure").into());
        }

        Ok(self.config.results.clone())
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
