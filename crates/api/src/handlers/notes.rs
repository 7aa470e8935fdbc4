//! Handlers for the `/api/notes` resource.
//!
//! The single-resource handlers take [`FoundNote`], so by the time they run
//! the note is known to exist.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use noteful_core::error::CoreError;
use noteful_core::notes::{
    keep_truthy, validate_required, validate_update, FIELD_CONTENT, FIELD_FOLDER_ID,
    FIELD_NOTE_NAME,
};
use noteful_db::models::note::{CreateNote, NotePayload, UpdateNote};

use crate::error::AppResult;
use crate::middleware::found_note::FoundNote;
use crate::response::NoteResponse;
use crate::routes::notes::NOTES_PATH;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

/// A request without a body (no `Content-Type`) reads as an empty payload,
/// so it is rejected by field validation rather than by the JSON extractor.
fn payload_or_default(
    payload: Result<Option<Json<NotePayload>>, JsonRejection>,
) -> Result<NotePayload, JsonRejection> {
    Ok(payload?.map(|Json(input)| input).unwrap_or_default())
}

/// Turn a create payload into store input, checking `note_name`, `content`
/// and `folder_id` in that order.
fn create_input(input: NotePayload) -> Result<CreateNote, CoreError> {
    validate_required(&[
        (FIELD_NOTE_NAME, &input.note_name),
        (FIELD_CONTENT, &input.content),
        (FIELD_FOLDER_ID, &input.folder_id),
    ])?;

    Ok(CreateNote {
        note_name: input.note_name.unwrap_or_default(),
        content: input.content.unwrap_or_default(),
        folder_id: input.folder_id.unwrap_or_default(),
    })
}

/// Turn a patch payload into store input. Falsy values are dropped, so
/// they neither count toward the minimum nor overwrite stored values.
fn update_input(input: NotePayload) -> Result<UpdateNote, CoreError> {
    validate_update(&[&input.note_name, &input.content, &input.folder_id])?;

    Ok(UpdateNote {
        note_name: keep_truthy(input.note_name),
        content: keep_truthy(input.content),
        folder_id: keep_truthy(input.folder_id),
    })
}

// ---------------------------------------------------------------------------
// Collection handlers
// ---------------------------------------------------------------------------

/// GET /notes
///
/// List every note.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.store.fetch_all().await?;
    let body: Vec<NoteResponse> = notes.iter().map(NoteResponse::from).collect();
    Ok(Json(body))
}

/// POST /notes
///
/// Create a note and point the `Location` header at it.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Option<Json<NotePayload>>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let input = payload_or_default(payload)?;

    let new_note = create_input(input).inspect_err(|err| {
        if let CoreError::MissingField(field) = err {
            tracing::error!(field, "{field} is required");
        }
    })?;

    let note = state.store.insert(&new_note).await?;

    tracing::info!(note_id = note.id, "Note with id {} created.", note.id);

    let location = format!("{NOTES_PATH}/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

// ---------------------------------------------------------------------------
// Single-resource handlers
// ---------------------------------------------------------------------------

/// GET /notes/{id}
pub async fn get_note(FoundNote(note): FoundNote) -> Json<NoteResponse> {
    Json(NoteResponse::from(note))
}

/// PATCH /notes/{id}
///
/// Apply a partial update. Responds 204 with no body.
pub async fn update_note(
    State(state): State<AppState>,
    FoundNote(note): FoundNote,
    payload: Result<Option<Json<NotePayload>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let input = payload_or_default(payload)?;

    let changes = update_input(input).inspect_err(|err| {
        tracing::error!(note_id = note.id, error = %err, "Rejected note update");
    })?;

    state.store.update(note.id, &changes).await?;

    tracing::info!(note_id = note.id, "Note with id {} updated.", note.id);

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /notes/{id}
///
/// Hard-delete the note. Responds 204 with no body.
pub async fn delete_note(
    State(state): State<AppState>,
    FoundNote(note): FoundNote,
) -> AppResult<StatusCode> {
    state.store.delete(note.id).await?;

    tracing::info!(note_id = note.id, "Note with id {} deleted.", note.id);

    Ok(StatusCode::NO_CONTENT)
}
