//! Note repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use notetag_core::{
    Error, NewNote, Note, NoteRepository, NoteUpdate, Result, StarTag, Tag, TopTag,
};

const NOTE_COLUMNS: &str =
    "id, title, description, tags, top_tag, star_tag, created_at, updated_at";

/// PostgreSQL implementation of NoteRepository.
///
/// Tags are stored as JSONB documents embedded in the note row.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn note_from_row(row: &PgRow) -> Result<Note> {
    let tags: Json<Vec<Tag>> = row.try_get("tags")?;
    let top_tag: Option<Json<TopTag>> = row.try_get("top_tag")?;
    let star_tag: Option<Json<StarTag>> = row.try_get("star_tag")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        tags: tags.0,
        top_tag: top_tag.map(|j| j.0),
        star_tag: star_tag.map(|j| j.0),
        created_at,
        updated_at,
    })
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Note> {
        let id = Uuid::now_v7();
        let now = Utc::now();

        let row = sqlx::query(&format!(
            "INSERT INTO note (id, title, description, tags, top_tag, star_tag, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(id)
        .bind(&note.title)
        .bind(&note.description)
        .bind(Json(&note.tags.tags))
        .bind(note.tags.top_tag.as_ref().map(Json))
        .bind(note.tags.star_tag.as_ref().map(Json))
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "insert",
            note_id = %id,
            tag_count = note.tags.tags.len(),
            "Note inserted"
        );
        note_from_row(&row)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(&format!("SELECT {} FROM note WHERE id = $1", NOTE_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(Error::NoteNotFound(id))?;
        note_from_row(&row)
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM note ORDER BY created_at DESC, id DESC",
            NOTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(note_from_row).collect()
    }

    async fn update(&self, id: Uuid, update: NoteUpdate) -> Result<Note> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM note WHERE id = $1 FOR UPDATE",
            NOTE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(Error::NoteNotFound(id))?;

        let mut note = note_from_row(&row)?;
        update.apply(&mut note, Utc::now());

        let row = sqlx::query(&format!(
            "UPDATE note
             SET title = $2, description = $3, tags = $4, top_tag = $5, star_tag = $6, updated_at = $7
             WHERE id = $1
             RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(id)
        .bind(&note.title)
        .bind(&note.description)
        .bind(Json(&note.tags))
        .bind(note.top_tag.as_ref().map(Json))
        .bind(note.star_tag.as_ref().map(Json))
        .bind(note.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "update",
            note_id = %id,
            "Note updated"
        );
        note_from_row(&row)
    }

    async fn delete(&self, id: Uuid) -> Result<Note> {
        let row = sqlx::query(&format!(
            "DELETE FROM note WHERE id = $1 RETURNING {}",
            NOTE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::NoteNotFound(id))?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "delete",
            note_id = %id,
            "Note deleted"
        );
        note_from_row(&row)
    }
}
