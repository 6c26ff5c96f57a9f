//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use notetag_core::{ClassificationError, ClassificationErrorKind, Error};

#[derive(Debug)]
pub enum ApiError {
    /// Failure on a note endpoint, rendered as `{message, error}`.
    Note { message: &'static str, source: Error },
    NotFound(String),
    BadRequest(String),
    /// Tag preview gateway failure.
    Classification {
        source: ClassificationError,
        expose_details: bool,
    },
    Internal(String),
}

impl ApiError {
    /// Wrap store or validation errors from a note endpoint.
    ///
    /// `message` is the operation summary clients display, e.g.
    /// "Error creating notes".
    pub fn note(message: &'static str) -> impl Fn(Error) -> Self + Copy {
        move |source| ApiError::Note { message, source }
    }

    /// Map a tag preview failure, keeping the gateway's failure kind.
    pub fn classification(err: Error, expose_details: bool) -> Self {
        match err {
            Error::Classification(source) => ApiError::Classification {
                source,
                expose_details,
            },
            other => other.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NoteNotFound(id) => ApiError::NotFound(format!("Note not found: {}", id)),
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Classification(source) => ApiError::Classification {
                source,
                expose_details: false,
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Note { message, source } => match source {
                Error::NoteNotFound(_) | Error::NotFound(_) => (
                    StatusCode::NOT_FOUND,
                    serde_json::json!({ "message": "Note not found" }),
                ),
                Error::InvalidInput(msg) => (
                    StatusCode::BAD_REQUEST,
                    serde_json::json!({ "message": message, "error": msg }),
                ),
                other => {
                    error!(subsystem = "api", error = %other, "{}", message);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        serde_json::json!({ "message": message, "error": other.to_string() }),
                    )
                }
            },
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({ "error": msg })),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::Classification {
                source,
                expose_details,
            } => match source.kind {
                ClassificationErrorKind::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    serde_json::json!({ "error": "Invalid Hugging Face API key" }),
                ),
                ClassificationErrorKind::Unavailable => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    serde_json::json!({
                        "error": "Service temporarily unavailable. Please try again."
                    }),
                ),
                ClassificationErrorKind::Other => {
                    let details = if expose_details {
                        source.message
                    } else {
                        "Internal server error".to_string()
                    };
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        serde_json::json!({
                            "error": "Failed to generate tags",
                            "details": details,
                        }),
                    )
                }
            },
            ApiError::Internal(msg) => {
                error!(subsystem = "api", error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_core_error_mapping() {
        assert_eq!(
            status_of(Error::InvalidInput("title is required".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(Error::NoteNotFound(Uuid::now_v7()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(Error::Database(sqlx::Error::PoolTimedOut).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_classification_kind_mapping() {
        let status = |kind| {
            status_of(ApiError::classification(
                ClassificationError::new(kind, "upstream").into(),
                false,
            ))
        };
        assert_eq!(
            status(ClassificationErrorKind::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(ClassificationErrorKind::Unavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(ClassificationErrorKind::Other),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_note_error_hides_missing_id() {
        let wrap = ApiError::note("Error deleting note");
        assert_eq!(
            status_of(wrap(Error::NoteNotFound(Uuid::now_v7()))),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(wrap(Error::Config("pool closed".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(wrap(Error::InvalidInput("title is required".into()))),
            StatusCode::BAD_REQUEST
        );
    }
}
