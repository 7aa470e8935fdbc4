//! Repository for the `notes` table.

use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, note_name, content, folder_id, date_created";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List every note, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY id ASC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new note, returning the created row with its assigned id
    /// and creation timestamp.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (note_name, content, folder_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.note_name)
            .bind(&input.content)
            .bind(input.folder_id)
            .fetch_one(pool)
            .await
    }

    /// Update the supplied fields of a note, keeping the rest.
    ///
    /// Returns the number of rows affected.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateNote) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET
                note_name = COALESCE($2, note_name),
                content = COALESCE($3, content),
                folder_id = COALESCE($4, folder_id)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.note_name)
        .bind(&input.content)
        .bind(input.folder_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-delete a note. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
