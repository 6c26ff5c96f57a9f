//! # notetag-core
//!
//! Core types, traits, and the tag ranking pipeline for notetag.
//!
//! This crate provides the data model shared by the store, the
//! classification gateway, and the HTTP API, plus the deterministic
//! post-processing applied to classifier output.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{ClassificationError, ClassificationErrorKind, Error, Result};
pub use models::*;
pub use tags::{calculate_priority, format_label, rank_tags, round2, MAX_TAGS};
pub use traits::*;
