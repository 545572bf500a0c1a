use crate::feedback::FeedbackRecord;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Edit slot was populated: switch to update mode with the item's values.
    Bind { item: FeedbackRecord },
    /// Back to an empty create form.
    Reset,
    InsertChar(char),
    Backspace,
    /// Pick a rating; `0` clears it.
    SelectRating(u8),
    RatingUp,
    RatingDown,
    NextField,
    /// Submission was refused; show `message` inline.
    Rejected { message: String },
}

impl Intent for FormIntent {}
