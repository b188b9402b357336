//! Error types for path resolution and field formatting.

use crate::value::ValueKind;

/// Error returned while resolving or updating a field by path.
///
/// Every variant carries `path`, the dotted path walked up to and including
/// the segment that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A named field does not exist on the message it was looked up in.
    #[error("field({path}) could not be found")]
    BadFieldName { path: String },

    /// A non-final path segment is not a message field.
    #[error("field({path}) should be a message, was a {kind}")]
    IntermediateNotMessage { path: String, kind: ValueKind },

    /// A non-final path segment is a message field that is not set.
    #[error("message field({path}) is an empty message")]
    IntermediateNotSet { path: String },

    /// A non-final path segment holds a collection of messages rather than a
    /// single one. Repeated fields must be fetched whole and walked by the
    /// caller.
    #[error("field({path}) is not a single message, cannot descend into a repeated field")]
    NotMessage { path: String },

    /// The field uses a feature this crate does not handle (maps, groups,
    /// lists of unsupported kinds).
    #[error("field({path}) is not supported: {detail}")]
    Unsupported { path: String, detail: String },

    /// The value handed to a setter does not match the field's declared kind.
    #[error("field({path}) is a {expected}, got a {got}")]
    TypeMismatch {
        path: String,
        expected: String,
        got: &'static str,
    },

    /// An enum number has no declared value in the field's enum type.
    #[error("field({path}) is an enum and {number} is not a valid value")]
    InvalidEnumValue { path: String, number: i32 },
}

impl FieldError {
    /// The dotted path that was being resolved when the error occurred.
    pub fn path(&self) -> &str {
        match self {
            FieldError::BadFieldName { path }
            | FieldError::IntermediateNotMessage { path, .. }
            | FieldError::IntermediateNotSet { path }
            | FieldError::NotMessage { path }
            | FieldError::Unsupported { path, .. }
            | FieldError::TypeMismatch { path, .. }
            | FieldError::InvalidEnumValue { path, .. } => path,
        }
    }
}

/// Error returned by [`field_as_str`](crate::field_as_str).
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("field({path}) of kind {kind} cannot be rendered as a string")]
    Unsupported { path: String, kind: ValueKind },

    #[error("field({path}) holds an out of range timestamp: {seconds}")]
    Timestamp { path: String, seconds: i64 },
}
