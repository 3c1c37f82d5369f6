use thiserror::Error;

use crate::entry::EntryType;

/// Raised at the parse boundary when an entry record does not describe exactly one variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("Unhandled entry type {discriminant:?}: {payload}")]
    UnknownType { discriminant: String, payload: String },

    #[error("{entry_type} entry is missing required field `{field}`")]
    MissingField {
        entry_type: EntryType,
        field: &'static str,
    },

    #[error("{entry_type} entry carries `{field}`, which belongs to {owner} entries")]
    ForeignField {
        entry_type: EntryType,
        field: &'static str,
        owner: EntryType,
    },

    #[error("Duplicate entry id {0}")]
    DuplicateId(String),

    #[error("Malformed entry: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for EntryError {
    fn from(err: serde_json::Error) -> Self {
        EntryError::Malformed(err.to_string())
    }
}
