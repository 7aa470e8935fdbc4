use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use noteful_core::types::DbId;
use tokio::sync::RwLock;

use super::{NoteStore, StoreResult};
use crate::models::note::{CreateNote, Note, UpdateNote};

/// In-process [`NoteStore`] backed by an ordered map.
///
/// Ids start at 1 and are never reused, matching `BIGSERIAL`. Folder ids are
/// not checked against any folder table.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: DbId,
    notes: BTreeMap<DbId, Note>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Note>> {
        let inner = self.inner.read().await;
        Ok(inner.notes.values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: DbId) -> StoreResult<Option<Note>> {
        let inner = self.inner.read().await;
        Ok(inner.notes.get(&id).cloned())
    }

    async fn insert(&self, input: &CreateNote) -> StoreResult<Note> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let note = Note {
            id: inner.last_id,
            note_name: input.note_name.clone(),
            content: input.content.clone(),
            folder_id: input.folder_id,
            date_created: Utc::now(),
        };
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: DbId, input: &UpdateNote) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(note) = inner.notes.get_mut(&id) {
            if let Some(note_name) = &input.note_name {
                note.note_name.clone_from(note_name);
            }
            if let Some(content) = &input.content {
                note.content.clone_from(content);
            }
            if let Some(folder_id) = input.folder_id {
                note.folder_id = folder_id;
            }
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        Ok(u64::from(inner.notes.remove(&id).is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
