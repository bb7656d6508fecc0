//! Folder row model.

use noteful_core::folders::FolderView;
use noteful_core::types::DbId;
use sqlx::FromRow;

/// A row from the `folders` table.
#[derive(Debug, Clone, FromRow)]
pub struct Folder {
    pub id: DbId,
    pub folder_name: String,
}

impl From<Folder> for FolderView {
    fn from(folder: Folder) -> Self {
        FolderView::new(folder.id, &folder.folder_name)
    }
}
