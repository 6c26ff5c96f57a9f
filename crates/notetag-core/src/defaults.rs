//! Centralized default constants for notetag.
//!
//! Crates reference these instead of defining their own magic numbers.

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Hugging Face Inference API base URL.
pub const HF_API_URL: &str = "https://api-inference.huggingface.co";

/// Default topic classification model.
pub const CLASSIFICATION_MODEL: &str = "cardiffnlp/tweet-topic-21-multi";

// =============================================================================
// API
// =============================================================================

/// Maximum characters accepted by the tag preview endpoint.
pub const PREVIEW_MAX_CHARS: usize = 1000;

/// Default listen host.
pub const HOST: &str = "0.0.0.0";

/// Default listen port.
pub const PORT: u16 = 5002;

/// Default CORS origin (the web frontend's dev server).
pub const ALLOWED_ORIGINS: &str = "http://localhost:3000";

/// Maximum accepted request body size in bytes.
pub const REQUEST_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// DATABASE
// =============================================================================

/// Default maximum number of pooled connections.
pub const DB_MAX_CONNECTIONS: u32 = 10;

/// Default connection acquire timeout in seconds.
pub const DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Default idle connection timeout in seconds.
pub const DB_IDLE_TIMEOUT_SECS: u64 = 600;
