//! By-id precondition shared by every verb on `/api/notes/{id}`.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use noteful_core::error::CoreError;
use noteful_core::notes::NOTE_ENTITY;
use noteful_core::types::DbId;
use noteful_db::models::note::Note;

use crate::error::AppError;
use crate::state::AppState;

/// The note named by the `{id}` path segment, looked up before the verb
/// handler runs.
///
/// Rejects with 404 `Note Not Found` when the id does not resolve, so the
/// handler body never executes for a missing note:
///
/// ```ignore
/// async fn get_note(FoundNote(note): FoundNote) -> Json<NoteResponse> {
///     Json(NoteResponse::from(note))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FoundNote(pub Note);

impl FromRequestParts<AppState> for FoundNote {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A segment that does not decode (e.g. `%FF`) is kept raw for the log.
        let raw_id = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw_id)) => raw_id,
            Err(_) => parts
                .uri
                .path()
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        // Ids that are not integers cannot name a row.
        let note = match raw_id.parse::<DbId>() {
            Ok(id) => state.store.fetch_by_id(id).await?,
            Err(_) => None,
        };

        match note {
            Some(note) => Ok(FoundNote(note)),
            None => {
                tracing::error!(note_id = %raw_id, "Note with id {raw_id} not found");
                Err(AppError::Core(CoreError::NotFound {
                    entity: NOTE_ENTITY,
                    id: raw_id,
                }))
            }
        }
    }
}
