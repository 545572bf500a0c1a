//! Feedback records and the user input that produces them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lowest rating a review can carry.
pub const MIN_RATING: u8 = 1;
/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 10;
/// Form-only value meaning "no rating picked yet".
pub const UNSET_RATING: u8 = 0;

/// Input rejected before any mutation or remote call happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Feedback text must not be empty")]
    EmptyText,

    #[error("Rating must be between {min} and {max}, got {0}", min = MIN_RATING, max = MAX_RATING)]
    RatingOutOfRange(u8),

    #[error("Nothing to update")]
    EmptyPatch,
}

/// Identifier of a record.
///
/// The collection endpoint hands out integers; the local-only variant
/// generates UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeedbackId {
    Number(u64),
    Text(String),
}

impl FeedbackId {
    /// Fresh random identifier for records created without a server.
    pub fn random() -> Self {
        FeedbackId::Text(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackId::Number(n) => write!(f, "{}", n),
            FeedbackId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for FeedbackId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u64>() {
            Ok(n) => FeedbackId::Number(n),
            Err(_) => FeedbackId::Text(s.to_string()),
        })
    }
}

impl From<u64> for FeedbackId {
    fn from(n: u64) -> Self {
        FeedbackId::Number(n)
    }
}

/// A rating in `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(pub(super) u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RatingOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One review on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    pub text: String,
    pub rating: Rating,
}

impl FeedbackRecord {
    /// Shallow merge: fields present in `patch` win, the rest are kept.
    pub fn merged(&self, patch: &FeedbackPatch) -> FeedbackRecord {
        FeedbackRecord {
            id: self.id.clone(),
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            rating: patch.rating.unwrap_or(self.rating),
        }
    }
}

/// Raw form input, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDraft {
    pub text: String,
    pub rating: u8,
}

impl FeedbackDraft {
    pub fn new(text: impl Into<String>, rating: u8) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }

    /// Checks the draft and trims surrounding whitespace from the text.
    pub fn validate(&self) -> Result<NewFeedback, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(NewFeedback {
            text: text.to_string(),
            rating: Rating::new(self.rating)?,
        })
    }
}

/// A validated create request: `{text, rating}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedback {
    pub text: String,
    pub rating: Rating,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl FeedbackPatch {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.rating.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyPatch);
        }
        match &self.text {
            Some(text) if text.trim().is_empty() => Err(ValidationError::EmptyText),
            _ => Ok(()),
        }
    }
}

impl From<&FeedbackRecord> for FeedbackPatch {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            text: Some(record.text.clone()),
            rating: Some(record.rating),
        }
    }
}
