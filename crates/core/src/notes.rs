//! Note validation and serialization.
//!
//! A note belongs to a folder through `folder_id`. The reference is only
//! checked for presence here; whether the folder exists is left to the
//! store's foreign key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Resource, ValidationError};
use crate::patch::truthy;
use crate::sanitize::sanitize;
use crate::types::{DbId, Timestamp};

/// A folder reference as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FolderRef {
    Id(DbId),
    Text(String),
}

impl FolderRef {
    fn resolve(self) -> Result<DbId, ValidationError> {
        match self {
            FolderRef::Id(id) => Ok(id),
            FolderRef::Text(raw) => raw.trim().parse().map_err(|_| ValidationError::InvalidField {
                resource: Resource::Note,
                field: "folder_id",
            }),
        }
    }
}

/// Raw note creation body. Unknown keys, including `date_modified`, are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub folder_id: Option<FolderRef>,
}

/// Raw note update body. `folder_id` is not a field here, so whatever a
/// client sends under that key is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePatchInput {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub date_modified: Option<String>,
}

/// A validated note ready to insert. `date_modified` is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_name: String,
    pub content: String,
    pub folder_id: DbId,
}

/// A validated, non-empty partial update for a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub note_name: Option<String>,
    pub content: Option<String>,
    pub date_modified: Option<Timestamp>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.note_name.is_none() && self.content.is_none() && self.date_modified.is_none()
    }
}

fn missing(field: &'static str) -> ValidationError {
    ValidationError::MissingField {
        resource: Resource::Note,
        field,
    }
}

/// Validate a note creation body.
///
/// `note_name`, `content` and `folder_id` must all be present and non-null.
/// Empty strings are accepted. The first missing field is reported, checked
/// in that order. A `folder_id` string that is not an integer is
/// [`ValidationError::InvalidField`].
pub fn validate_create(input: NoteInput) -> Result<NewNote, ValidationError> {
    let note_name = input.note_name.ok_or_else(|| missing("note_name"))?;
    let content = input.content.ok_or_else(|| missing("content"))?;
    let folder_id = input.folder_id.ok_or_else(|| missing("folder_id"))?.resolve()?;

    Ok(NewNote {
        note_name,
        content,
        folder_id,
    })
}

/// Build a patch from a note update body.
///
/// Each of `note_name`, `content` and `date_modified` is kept only when
/// truthy. `date_modified` must be RFC 3339 when given.
pub fn validate_update(input: NotePatchInput) -> Result<NotePatch, ValidationError> {
    let date_modified = truthy(input.date_modified)
        .map(|raw| parse_timestamp(&raw))
        .transpose()?;

    let patch = NotePatch {
        note_name: truthy(input.note_name),
        content: truthy(input.content),
        date_modified,
    };

    if patch.is_empty() {
        return Err(ValidationError::EmptyUpdate {
            resource: Resource::Note,
        });
    }
    Ok(patch)
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| ValidationError::InvalidField {
            resource: Resource::Note,
            field: "date_modified",
        })
}

/// External JSON shape of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    id: DbId,
    note_name: String,
    content: String,
    date_modified: Timestamp,
    folder_id: DbId,
}

impl NoteView {
    /// Shape a stored note for output, sanitizing its name and content.
    pub fn new(
        id: DbId,
        note_name: &str,
        content: &str,
        date_modified: Timestamp,
        folder_id: DbId,
    ) -> Self {
        Self {
            id,
            note_name: sanitize(note_name),
            content: sanitize(content),
            date_modified,
            folder_id,
        }
    }

    pub fn id(&self) -> DbId {
        self.id
    }

    pub fn note_name(&self) -> &str {
        &self.note_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date_modified(&self) -> Timestamp {
        self.date_modified
    }

    pub fn folder_id(&self) -> DbId {
        self.folder_id
    }
}
