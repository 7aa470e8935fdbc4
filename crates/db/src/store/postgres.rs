use async_trait::async_trait;
use noteful_core::types::DbId;

use super::{NoteStore, StoreResult};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::repositories::NoteRepo;
use crate::DbPool;

/// PostgreSQL implementation of [`NoteStore`].
#[derive(Clone)]
pub struct PgNoteStore {
    pool: DbPool,
}

impl PgNoteStore {
    /// Create a new store over the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Note>> {
        NoteRepo::list(&self.pool).await
    }

    async fn fetch_by_id(&self, id: DbId) -> StoreResult<Option<Note>> {
        NoteRepo::find_by_id(&self.pool, id).await
    }

    async fn insert(&self, input: &CreateNote) -> StoreResult<Note> {
        NoteRepo::create(&self.pool, input).await
    }

    async fn update(&self, id: DbId, input: &UpdateNote) -> StoreResult<()> {
        let rows = NoteRepo::update(&self.pool, id, input).await?;
        tracing::debug!(note_id = id, rows, "Note row updated");
        Ok(())
    }

    async fn delete(&self, id: DbId) -> StoreResult<u64> {
        NoteRepo::delete(&self.pool, id).await
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await
    }
}
