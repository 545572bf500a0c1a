use thiserror::Error;

use crate::feedback::{FeedbackId, ValidationError};
use crate::remote::TransportError;

/// Errors returned by store operations.
///
/// None of them is fatal; the snapshot always stays at its last good value.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad input; nothing was sent or changed
    #[error("Invalid feedback: {0}")]
    Validation(#[from] ValidationError),

    /// Update target is not on the board
    #[error("Feedback '{id}' not found")]
    NotFound { id: FeedbackId },

    /// The collection call failed
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl StoreError {
    /// Message suitable for an inline form hint or a banner.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Validation(err) => err.to_string(),
            StoreError::NotFound { id } => format!("Feedback '{}' no longer exists", id),
            StoreError::Transport(_) => {
                "Could not reach the feedback service. Please try again.".to_string()
            }
        }
    }
}
