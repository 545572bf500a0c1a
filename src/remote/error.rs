use thiserror::Error;

use crate::feedback::FeedbackId;

/// Failures talking to the collection.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network unreachable, refused, timed out
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status other than 404 on a record URL
    #[error("Collection returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the record format
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The collection has no record with this id
    #[error("Feedback '{id}' not found in collection")]
    NotFound { id: FeedbackId },

    /// The collection answered, but with something the store cannot accept
    #[error("Protocol error: {0}")]
    Protocol(String),
}

impl TransportError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TransportError::NotFound { .. })
    }
}
