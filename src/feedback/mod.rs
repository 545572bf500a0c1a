//! Feedback domain types.

mod record;
mod stats;

pub use record::{
    FeedbackDraft, FeedbackId, FeedbackPatch, FeedbackRecord, NewFeedback, Rating,
    ValidationError, MAX_RATING, MIN_RATING, UNSET_RATING,
};
pub use stats::{average_rating, format_average, FeedbackStats};

/// The three reviews a fresh board starts with.
pub fn sample_records() -> Vec<FeedbackRecord> {
    [(1, 10), (2, 8), (3, 5)]
        .into_iter()
        .map(|(id, rating)| FeedbackRecord {
            id: FeedbackId::Number(id),
            text: format!("This item is from feedback {}", id),
            rating: Rating(rating),
        })
        .collect()
}
