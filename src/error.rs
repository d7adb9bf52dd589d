//! Error types for notification delivery.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, NtfyError>;

/// Everything a push can fail with.
///
/// `Delivery` and `Transport` are deliberately distinct: the first means
/// the service answered and rejected the request, the second means the
/// service was never reached.
#[derive(Debug, Error)]
pub enum NtfyError {
    /// Caller misuse: missing topic, both-or-neither of message/file,
    /// malformed URL field, incomplete priority table.
    #[error("{0}")]
    Config(String),

    /// The attachment path does not point to an existing regular file.
    #[error("attachment is not an existing regular file: {}", .path.display())]
    AttachmentNotFound { path: PathBuf },

    /// The service accepted the connection but rejected the request.
    #[error("notification rejected: {status} ({reason})")]
    Delivery { status: i32, reason: String },

    /// Network-level failure reaching the service.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

impl NtfyError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        NtfyError::Config(message.into())
    }
}
