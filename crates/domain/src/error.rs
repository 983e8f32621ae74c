//! Error raised when a status snapshot cannot be obtained.
//!
//! There is a single failure kind from the widget's point of view: the fetch
//! or the decode failed. The variants only exist so the log line says which.
//! An HTTP error status is not a failure; its body is decoded like any other.

/// Failure to fetch or decode a [`StatusSnapshot`](crate::snapshot::StatusSnapshot).
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("status request failed: {0}")]
    Network(String),

    /// The response body is not a JSON status object.
    #[error("status body is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

impl StatusError {
    /// Whether the failure happened before a response body was read.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
