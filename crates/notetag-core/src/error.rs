//! Error types for notetag.

use thiserror::Error;

/// Result type alias using notetag's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a call to the classification gateway failed.
///
/// The API layer maps each kind to a distinct HTTP outcome on the preview
/// endpoint; note create/update absorb all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationErrorKind {
    /// Credential missing, expired, or rejected upstream.
    InvalidCredentials,
    /// Connection failure, timeout, or upstream overload.
    Unavailable,
    /// Anything else (unexpected status, undecodable body).
    Other,
}

impl ClassificationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unavailable => "unavailable",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ClassificationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed classification request, with its structured kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ClassificationError {
    pub kind: ClassificationErrorKind,
    pub message: String,
}

impl ClassificationError {
    pub fn new(kind: ClassificationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::new(ClassificationErrorKind::InvalidCredentials, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ClassificationErrorKind::Unavailable, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ClassificationErrorKind::Other, message)
    }
}

/// Core error type for notetag operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NoteNotFound(uuid::Uuid),

    /// Classification gateway call failed
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// The classification failure kind, if this is a gateway error.
    pub fn classification_kind(&self) -> Option<ClassificationErrorKind> {
        match self {
            Error::Classification(e) => Some(e.kind),
            _ => None,
        }
    }
}
