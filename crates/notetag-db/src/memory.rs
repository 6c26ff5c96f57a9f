//! In-memory note repository.
//!
//! Backs the server when no `DATABASE_URL` is configured and serves as the
//! store substitute in handler tests. Contents are lost on restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use notetag_core::{Error, NewNote, Note, NoteRepository, NoteUpdate, Result};

/// Process-local implementation of NoteRepository.
#[derive(Clone, Default)]
pub struct MemoryNoteRepository {
    notes: Arc<RwLock<HashMap<Uuid, Note>>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes.
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Note> {
        let now = Utc::now();
        let stored = Note {
            id: Uuid::now_v7(),
            title: note.title,
            description: note.description,
            tags: note.tags.tags,
            top_tag: note.tags.top_tag,
            star_tag: note.tags.star_tag,
            created_at: now,
            updated_at: now,
        };
        self.notes.write().await.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        self.notes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self.notes.read().await.values().cloned().collect();
        // UUIDv7 ids break ties between notes created in the same instant.
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn update(&self, id: Uuid, update: NoteUpdate) -> Result<Note> {
        let mut notes = self.notes.write().await;
        let note = notes.get_mut(&id).ok_or(Error::NoteNotFound(id))?;
        update.apply(note, Utc::now());
        Ok(note.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Note> {
        self.notes
            .write()
            .await
            .remove(&id)
            .ok_or(Error::NoteNotFound(id))
    }
}
