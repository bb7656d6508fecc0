use std::fmt;

use crate::types::DbId;

/// The two REST resources exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Folder,
    Note,
}

impl Resource {
    /// Client-facing message returned with a 404 for this resource.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::Folder => "Folder does not exist",
            Resource::Note => "Note doesn't exist",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Folder => f.write_str("Folder"),
            Resource::Note => f.write_str("Note"),
        }
    }
}

/// A client-supplied body broke a required-field or non-empty-patch rule.
///
/// The `Display` output is the exact message sent back to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", missing_field_message(.resource, .field))]
    MissingField {
        resource: Resource,
        field: &'static str,
    },

    #[error("{}", empty_update_message(.resource))]
    EmptyUpdate { resource: Resource },

    #[error("Invalid '{field}' in request body")]
    InvalidField {
        resource: Resource,
        field: &'static str,
    },
}

fn missing_field_message(resource: &Resource, field: &str) -> String {
    match resource {
        Resource::Folder => "Missing folder name".to_string(),
        Resource::Note => format!("Missing '{field}' in request body"),
    }
}

fn empty_update_message(resource: &Resource) -> &'static str {
    match resource {
        Resource::Folder => "Request body must contain a valid folder name",
        Resource::Note => "Request body must contain either 'name' or 'content'",
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {resource} with id {id}")]
    NotFound { resource: Resource, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}
