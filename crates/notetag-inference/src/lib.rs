//! # notetag-inference
//!
//! Classification gateway for notetag.
//!
//! This crate provides:
//! - A Hugging Face Inference API backend implementing
//!   [`notetag_core::ClassificationBackend`]
//! - Wire-format parsing tolerant of the API's response shapes
//! - Mapping of upstream failures onto [`notetag_core::ClassificationErrorKind`]
//! - A mock backend for deterministic tests (feature `mock`)

pub mod huggingface;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use huggingface::{HuggingFaceBackend, HuggingFaceConfig};

#[cfg(any(test, feature = "mock"))]
pub use mock::MockClassificationBackend;
