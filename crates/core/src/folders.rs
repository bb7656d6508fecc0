//! Folder validation and serialization.
//!
//! Request bodies arrive as [`FolderInput`]. Creation turns one into a
//! [`NewFolder`], partial updates into a [`FolderPatch`], and stored rows
//! leave the service as a sanitized [`FolderView`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Resource, ValidationError};
use crate::patch::truthy;
use crate::sanitize::sanitize;
use crate::types::DbId;

/// Raw folder request body. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FolderInput {
    #[validate(required, length(min = 1))]
    pub folder_name: Option<String>,
}

/// A validated folder ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub folder_name: String,
}

/// A validated, non-empty partial update for a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

impl FolderPatch {
    pub fn is_empty(&self) -> bool {
        self.folder_name.is_none()
    }
}

/// Validate a folder creation body.
///
/// Fails with [`ValidationError::MissingField`] when `folder_name` is absent,
/// `null` or empty.
pub fn validate_create(input: FolderInput) -> Result<NewFolder, ValidationError> {
    match (input.validate(), input.folder_name) {
        (Ok(()), Some(folder_name)) => Ok(NewFolder { folder_name }),
        _ => Err(ValidationError::MissingField {
            resource: Resource::Folder,
            field: "folder_name",
        }),
    }
}

/// Build a patch from a folder update body.
///
/// Only `folder_name` is patchable; a patch with nothing truthy in it is
/// rejected with [`ValidationError::EmptyUpdate`].
pub fn validate_update(input: FolderInput) -> Result<FolderPatch, ValidationError> {
    let patch = FolderPatch {
        folder_name: truthy(input.folder_name),
    };

    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate {
            resource: Resource::Folder,
        });
    }
    Ok(patch)
}

/// External JSON shape of a folder: `{id, folder_name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderView {
    id: DbId,
    folder_name: String,
}

impl FolderView {
    /// Shape a stored folder for output, sanitizing its name.
    pub fn new(id: DbId, folder_name: &str) -> Self {
        Self {
            id,
            folder_name: sanitize(folder_name),
        }
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }
}
