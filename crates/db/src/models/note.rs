//! Note row model.

use noteful_core::notes::NoteView;
use noteful_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub note_name: String,
    pub content: String,
    pub folder_id: DbId,
    pub date_modified: Timestamp,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        NoteView::new(
            note.id,
            &note.note_name,
            &note.content,
            note.date_modified,
            note.folder_id,
        )
    }
}
