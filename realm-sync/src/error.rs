//! Archive loader error types.

use thiserror::Error;

/// Errors that can occur while fetching the remote archive export.
///
/// None of these reach the end user: [`crate::ArchiveLoader::load`] logs
/// them and falls back to the placeholder archive.
#[derive(Debug, Error)]
pub enum SyncError {
    /// HTTP request failed.
    #[error("Archive request failed: {0}")]
    RequestFailed(String),

    /// Request timed out.
    #[error("Archive request timed out after {0}ms")]
    Timeout(u64),

    /// The export host could not be reached.
    #[error("Archive source unavailable: {0}")]
    Unavailable(String),

    /// The server answered with a non-success status.
    #[error("Archive source returned HTTP {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The payload held no usable records.
    #[error("Archive export is malformed: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::Timeout(0)
        } else if err.is_connect() {
            SyncError::Unavailable(err.to_string())
        } else if let Some(status) = err.status() {
            SyncError::Status {
                status: status.as_u16(),
            }
        } else {
            SyncError::RequestFailed(err.to_string())
        }
    }
}
