//! Domain layer for the noteful service.
//!
//! Holds the validation and serialization contract shared by the folder and
//! note resources. Nothing in here touches the database or HTTP.

pub mod error;
pub mod folders;
pub mod notes;
pub mod patch;
pub mod sanitize;
pub mod types;
