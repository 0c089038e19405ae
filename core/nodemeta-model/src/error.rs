//! Error types for the record model.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building type names or loading records.
///
/// Editing a record never produces one of these; invalid edit input is a no-op.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Type name is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("invalid meta type: {0:?}")]
    InvalidMetaType(String),

    /// Loaded JSON does not have the `meta_<type>: [ {..}, .. ]` shape.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
