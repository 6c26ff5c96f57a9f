//! # notetag-api
//!
//! HTTP API for notes with automatically generated topic tags.
//!
//! The router is built from an [`AppState`] holding the note store and the
//! tag generator as trait objects, so tests can serve it against in-memory
//! and mock collaborators.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request},
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use notetag_core::{defaults, logging, NoteRepository};

pub use config::ApiConfig;
pub use error::ApiError;
pub use services::TagGenerator;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note store (PostgreSQL or in-memory).
    pub notes: Arc<dyn NoteRepository>,
    pub tagger: TagGenerator,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>, tagger: TagGenerator, config: ApiConfig) -> Self {
        Self {
            notes,
            tagger,
            config: Arc::new(config),
        }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// OpenAPI document served at `/openapi.json` and browsable at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "notetag API",
        description = "Notes with automatically generated topic tags"
    ),
    tags(
        (name = "Notes", description = "Note CRUD operations"),
        (name = "Tags", description = "Tag preview"),
        (name = "System", description = "Health checks")
    ),
    components(schemas(
        notetag_core::Note,
        notetag_core::Tag,
        notetag_core::TopTag,
        notetag_core::StarTag,
        handlers::notes::CreateNoteBody,
        handlers::notes::UpdateNoteBody,
        handlers::notes::NoteResponse,
        handlers::notes::DeletedNoteResponse,
        handlers::tags::GenerateTagsBody,
        handlers::tags::GenerateTagsResponse,
    ))
)]
pub struct ApiDoc;

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let allowed_origins = state.config.allowed_origins.clone();

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        // Notes CRUD
        .route(
            "/notes",
            post(handlers::create_note).get(handlers::list_notes),
        )
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .patch(handlers::update_note)
                .delete(handlers::delete_note),
        )
        // Tag preview, also under /notes where the web client calls it
        .route("/tags/generate-tags", post(handlers::generate_tags))
        .route("/notes/tags/generate-tags", post(handlers::generate_tags))
        // Middleware
        .layer(CatchPanicLayer::new())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let span = tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                );
                if let Some(id) = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                {
                    span.record(logging::REQUEST_ID, id);
                }
                span
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
                .allow_credentials(true)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(RequestBodyLimitLayer::new(defaults::REQUEST_BODY_LIMIT))
        .with_state(state)
}
