//! Repository for the `notes` table.

use noteful_core::notes::{NewNote, NotePatch};
use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::Note;

/// Column list for notes queries.
const COLUMNS: &str = "id, note_name, content, folder_id, date_modified";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, oldest first.
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

    /// Insert a note, returning the created row. `date_modified` takes the
    /// column default.
    pub async fn create(pool: &PgPool, input: &NewNote) -> Result<Note, sqlx::Error> {
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

    /// Apply a patch to a note. Returns `None` if no row has that id.
    ///
    /// `date_modified` is refreshed to `now()` unless the patch carries an
    /// explicit value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &NotePatch,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                note_name = COALESCE($2, note_name),
                content = COALESCE($3, content),
                date_modified = COALESCE($4, now())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&patch.note_name)
            .bind(&patch.content)
            .bind(patch.date_modified)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
