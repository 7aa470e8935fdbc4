//! Note model.

use noteful_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `notes` table.
///
/// Text fields hold exactly what the client sent; escaping happens when a
/// response is built.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: DbId,
    pub note_name: String,
    pub content: String,
    pub folder_id: DbId,
    pub date_created: Timestamp,
}

/// Request body for both `POST` and `PATCH`.
///
/// Every field is optional at the wire level; presence rules are applied
/// by the handlers.
#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
}

/// Validated input for inserting a note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub note_name: String,
    pub content: String,
    pub folder_id: DbId,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<DbId>,
}
