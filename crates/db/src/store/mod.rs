//! The notes store seam.
//!
//! Handlers hold an `Arc<dyn NoteStore>` injected at startup, so the same
//! HTTP layer runs against PostgreSQL in production and an in-memory map in
//! development and tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use noteful_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

pub use memory::MemoryNoteStore;
pub use postgres::PgNoteStore;

/// Store operations fail with the driver error; callers never translate it.
pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Persistence operations required by the notes resource.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Fetch every note, oldest first.
    async fn fetch_all(&self) -> StoreResult<Vec<Note>>;

    /// Fetch a single note, `None` when the id is unknown.
    async fn fetch_by_id(&self, id: DbId) -> StoreResult<Option<Note>>;

    /// Insert a note; the store assigns `id` and `date_created`.
    async fn insert(&self, input: &CreateNote) -> StoreResult<Note>;

    /// Merge the supplied fields into an existing note.
    async fn update(&self, id: DbId, input: &UpdateNote) -> StoreResult<()>;

    /// Remove a note, returning the number of rows deleted.
    async fn delete(&self, id: DbId) -> StoreResult<u64>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
