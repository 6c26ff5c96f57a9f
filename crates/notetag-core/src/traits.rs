//! Core traits for notetag's external collaborators.
//!
//! The note store and the classification gateway are injected behind these
//! traits so handlers can run against PostgreSQL and Hugging Face in
//! production and against in-memory/mock implementations in tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note and return it as stored.
    async fn insert(&self, note: NewNote) -> Result<Note>;

    /// Fetch a note by ID. Fails with `Error::NoteNotFound` if absent.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// List all notes, newest first by creation time.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Apply a partial update and return the updated note.
    async fn update(&self, id: Uuid, update: NoteUpdate) -> Result<Note>;

    /// Delete a note and return what was deleted.
    async fn delete(&self, id: Uuid) -> Result<Note>;
}

// =============================================================================
// CLASSIFICATION TRAITS
// =============================================================================

/// Backend returning raw label/score pairs for a text.
#[async_trait]
pub trait ClassificationBackend: Send + Sync {
    /// Classify `text`. Failures are reported as `Error::Classification`
    /// carrying a [`crate::ClassificationErrorKind`].
    async fn classify(&self, text: &str) -> Result<Vec<RawClassification>>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
