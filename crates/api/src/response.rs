//! Response shapes for the notes resource.
//!
//! Every note leaves the service through [`NoteResponse`], which is where
//! user-supplied text gets sanitized.

use noteful_core::sanitize::sanitize;
use noteful_core::types::{DbId, Timestamp};
use noteful_db::models::note::Note;
use serde::Serialize;

/// JSON representation of a note: `{id, note_name, content, folder_id, date_created}`.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: DbId,
    pub note_name: String,
    pub content: String,
    pub folder_id: DbId,
    pub date_created: Timestamp,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            note_name: sanitize(&note.note_name),
            content: sanitize(&note.content),
            folder_id: note.folder_id,
            date_created: note.date_created,
        }
    }
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self::from(&note)
    }
}
