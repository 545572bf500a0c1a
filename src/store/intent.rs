use crate::feedback::{FeedbackId, FeedbackRecord};
use crate::mvi::Intent;

/// Transitions of the feedback snapshot.
///
/// Remote outcomes arrive as intents only after the call resolved.
#[derive(Debug, Clone)]
pub enum FeedbackIntent {
    LoadStarted,
    /// `pending` counts loads still in flight after this one.
    LoadFinished {
        records: Vec<FeedbackRecord>,
        pending: usize,
    },
    LoadFailed {
        message: String,
        pending: usize,
    },

    /// A server-confirmed record to prepend.
    Added { record: FeedbackRecord },
    Removed { id: FeedbackId },

    /// Bind the edit form to a copy of `item`. Replaces any previous item.
    EditRequested { item: FeedbackRecord },
    EditCancelled,
    /// Server-confirmed replacement for the record with the same id.
    Updated { record: FeedbackRecord },
    /// Update target vanished; drop a stale edit slot.
    UpdateTargetMissing { id: FeedbackId },

    OperationFailed { message: String },
    ErrorDismissed,
}

impl Intent for FeedbackIntent {}
