//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while pushing a record.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No target identifier was given; nothing was sent.
    #[error("target id is required")]
    MissingTarget,

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("HTTP {status}")]
    RemoteRejected { status: u16 },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SyncError {
    /// Returns the HTTP status carried by a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::RemoteRejected { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the failure happened below HTTP.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }
}
