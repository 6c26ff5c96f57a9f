//! Hugging Face-specific error handling.

use notetag_core::{ClassificationError, ClassificationErrorKind};

/// Hugging Face error codes, derived from the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HfErrorCode {
    /// Missing, invalid, or under-privileged token.
    AuthenticationError,
    /// Rate limit exceeded.
    RateLimitExceeded,
    /// Model is still loading or the upstream is overloaded.
    ServiceUnavailable,
    /// Model not found or not deployed.
    ModelNotFound,
    /// Server error.
    ServerError,
    /// Unknown error.
    Unknown,
}

impl HfErrorCode {
    /// Determine error code from HTTP status.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::AuthenticationError,
            429 => Self::RateLimitExceeded,
            502..=504 => Self::ServiceUnavailable,
            404 => Self::ModelNotFound,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// The structured failure kind reported to callers.
    pub fn kind(&self) -> ClassificationErrorKind {
        match self {
            Self::AuthenticationError => ClassificationErrorKind::InvalidCredentials,
            Self::RateLimitExceeded | Self::ServiceUnavailable => {
                ClassificationErrorKind::Unavailable
            }
            Self::ModelNotFound | Self::ServerError | Self::Unknown => {
                ClassificationErrorKind::Other
            }
        }
    }

    /// Convert into a classification error with the upstream message.
    pub fn into_error(self, status: u16, message: &str) -> ClassificationError {
        let prefix = match self {
            Self::AuthenticationError => "Authentication failed",
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::ServiceUnavailable => "Service unavailable",
            Self::ModelNotFound => "Model not found",
            Self::ServerError => "Server error",
            Self::Unknown => "Unexpected response",
        };
        ClassificationError::new(
            self.kind(),
            format!("{} (HTTP {}): {}", prefix, status, message),
        )
    }
}

/// Classify a transport-level failure.
///
/// Connection failures and timeouts mean the gateway could not be reached.
pub fn transport_error(e: &reqwest::Error) -> ClassificationError {
    if e.is_timeout() || e.is_connect() {
        ClassificationError::unavailable(format!("Request failed: {}", e))
    } else {
        ClassificationError::other(format!("Request failed: {}", e))
    }
}
