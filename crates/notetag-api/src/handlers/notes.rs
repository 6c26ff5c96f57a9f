//! Note HTTP handlers.
//!
//! Tags are generated from the note description on create, and regenerated
//! on update only when a new description is supplied. Classification
//! failures never block a write; the note is stored with empty tags.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use notetag_core::{required_field, Error, NewNote, Note, NoteUpdate, TagSet};

use crate::{ApiError, AppState};

/// Request body for creating a note.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateNoteBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for a partial note update.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateNoteBody {
    #[serde(default)]
    pub title: Option<String>,
    /// When present, tags are regenerated from the new text.
    #[serde(default)]
    pub description: Option<String>,
}

/// `{message, data}` envelope returned by create and update.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct NoteResponse {
    pub message: String,
    pub data: Note,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeletedNoteResponse {
    pub message: String,
    #[serde(rename = "deletedNote")]
    pub deleted_note: Note,
}

/// Ids that are not UUIDs cannot exist, so they are reported as not found.
fn parse_note_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(format!("Note {}", raw)))
}

fn invalid_body(rejection: JsonRejection) -> Error {
    Error::InvalidInput(rejection.body_text())
}

/// Create a note with generated tags.
///
/// # Returns
/// - 201 Created with `{message, data}`
/// - 400 Bad Request if the body is not JSON, or title or description is
///   missing or blank
/// - 500 Internal Server Error if the store fails
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let on_err = ApiError::note("Error creating notes");
    let Json(body) = payload.map_err(|r| on_err(invalid_body(r)))?;

    let mut new_note = NewNote::new(
        body.title.as_deref().unwrap_or_default(),
        body.description.as_deref().unwrap_or_default(),
        TagSet::empty(),
    )
    .map_err(on_err)?;
    new_note.tags = state.tagger.generate_for_note(&new_note.description).await;

    let note = state.notes.insert(new_note).await.map_err(on_err)?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "create",
        note_id = %note.id,
        tag_count = note.tags.len(),
        "Note created"
    );
    Ok((
        StatusCode::CREATED,
        Json(NoteResponse {
            message: "Notes created successfully with AI tags".to_string(),
            data: note,
        }),
    ))
}

/// List all notes, newest first.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .notes
        .list()
        .await
        .map_err(ApiError::note("Error fetching notes"))?;
    Ok(Json(notes))
}

/// Get a single note.
///
/// # Returns
/// - 200 OK with the note
/// - 404 Not Found if the id is unknown or malformed
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let on_err = ApiError::note("Error fetching note");
    let id = parse_note_id(&id).map_err(on_err)?;
    let note = state.notes.fetch(id).await.map_err(on_err)?;
    Ok(Json(note))
}

/// Update a note's title and/or description.
///
/// # Returns
/// - 200 OK with `{message, data}`
/// - 400 Bad Request if a supplied field is blank
/// - 404 Not Found if the note does not exist
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteBody>, JsonRejection>,
) -> Result<Json<NoteResponse>, ApiError> {
    let on_err = ApiError::note("Error updating note");
    let id = parse_note_id(&id).map_err(on_err)?;
    let Json(body) = payload.map_err(|r| on_err(invalid_body(r)))?;

    let title = body
        .title
        .as_deref()
        .map(|t| required_field("title", t))
        .transpose()
        .map_err(on_err)?;
    let description = body
        .description
        .as_deref()
        .map(|d| required_field("description", d))
        .transpose()
        .map_err(on_err)?;

    // Unknown ids must not cost a classification call.
    state.notes.fetch(id).await.map_err(on_err)?;

    let tags = match description.as_deref() {
        Some(text) => Some(state.tagger.generate_for_note(text).await),
        None => None,
    };
    let retagged = tags.is_some();

    let note = state
        .notes
        .update(
            id,
            NoteUpdate {
                title,
                description,
                tags,
            },
        )
        .await
        .map_err(on_err)?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "update",
        note_id = %note.id,
        retagged,
        "Note updated"
    );
    Ok(Json(NoteResponse {
        message: "Note updated successfully with new tags".to_string(),
        data: note,
    }))
}

/// Delete a note, returning what was removed.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedNoteResponse>, ApiError> {
    let on_err = ApiError::note("Error deleting note");
    let id = parse_note_id(&id).map_err(on_err)?;
    let deleted_note = state.notes.delete(id).await.map_err(on_err)?;

    info!(
        subsystem = "api",
        component = "notes",
        op = "delete",
        note_id = %id,
        "Note deleted"
    );
    Ok(Json(DeletedNoteResponse {
        message: "Note deleted successfully".to_string(),
        deleted_note,
    }))
}
