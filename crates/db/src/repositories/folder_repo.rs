//! Repository for the `folders` table.

use noteful_core::folders::{FolderPatch, NewFolder};
use noteful_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::Folder;

/// Column list for folders queries.
const COLUMNS: &str = "id, folder_name";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// List all folders, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders ORDER BY id ASC");
        sqlx::query_as::<_, Folder>(&query).fetch_all(pool).await
    }

    /// Find a folder by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a folder, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &NewFolder) -> Result<Folder, sqlx::Error> {
        let query = format!(
            "INSERT INTO folders (folder_name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(&input.folder_name)
            .fetch_one(pool)
            .await
    }

    /// Apply a patch to a folder. Returns `None` if no row has that id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &FolderPatch,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET
                folder_name = COALESCE($2, folder_name)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(&patch.folder_name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a folder by ID. Returns `true` if a row was deleted.
    ///
    /// Notes in the folder go with it through the `ON DELETE CASCADE`
    /// foreign key.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
