//! Repository layer: one zero-sized struct per table with async CRUD
//! functions that take the pool explicitly.

pub mod folder_repo;
pub mod note_repo;

pub use folder_repo::FolderRepo;
pub use note_repo::NoteRepo;
