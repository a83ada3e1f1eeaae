use thiserror::Error;

/// Errors raised by a [`Store`](crate::Store).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record matches the requested key.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// A unique field value is already held by another record.
    #[error("{kind} with {field} '{value}' already exists")]
    Conflict {
        kind: &'static str,
        field: &'static str,
        value: String,
    },

    /// No further ids can be assigned.
    #[error("{kind} id sequence is exhausted")]
    SequenceExhausted { kind: &'static str },
}

impl StoreError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn conflict(kind: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            field,
            value: value.into(),
        }
    }
}

/// Errors produced while validating request data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("missing required field '{0}'")]
    Missing(&'static str),

    /// A text field was supplied but empty.
    #[error("field '{0}' must not be empty")]
    Empty(&'static str),

    /// A field that must hold a JSON number held something else.
    #[error("field '{0}' must be a number")]
    NotNumeric(&'static str),

    /// A field that must hold an absolute URL could not be parsed.
    #[error("field '{field}' must be an absolute URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    /// The request body could not be decoded at all.
    #[error("malformed request body: {0}")]
    Malformed(String),
}
