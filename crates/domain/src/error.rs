//! Error types for notification handling.

use crate::time::Timestamp;

/// Raised when a request body cannot be decoded as a notification.
#[derive(Debug, thiserror::Error)]
pub enum ChangelogError {
    /// The body is not valid JSON (empty bodies included).
    #[error("invalid JSON body")]
    InvalidJson {
        /// When the body finished arriving.
        timestamp: Timestamp,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
}

impl ChangelogError {
    /// Time captured for the failed request.
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::InvalidJson { timestamp, .. } => *timestamp,
        }
    }
}
