//! Hugging Face Inference API classification backend.
//!
//! Sends note text to a hosted text-classification model and returns the
//! raw label/score pairs it produces.
//!
//! # Example
//!
//! ```rust,no_run
//! use notetag_core::ClassificationBackend;
//! use notetag_inference::huggingface::{HuggingFaceBackend, HuggingFaceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     // From environment variables
//!     let backend = HuggingFaceBackend::from_env().unwrap();
//!
//!     // Or with custom config
//!     let config = HuggingFaceConfig {
//!         api_key: Some("hf_xxx".to_string()),
//!         ..Default::default()
//!     };
//!     let backend = HuggingFaceBackend::new(config).unwrap();
//!
//!     let labels = backend.classify("I love machine learning").await.unwrap();
//!     println!("{} labels", labels.len());
//! }
//! ```

mod backend;
mod error;
mod types;

pub use backend::{HuggingFaceBackend, HuggingFaceConfig};
pub use error::{transport_error, HfErrorCode};
pub use types::*;
