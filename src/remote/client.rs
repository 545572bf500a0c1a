//! Contract between the store and whatever holds the records.

use async_trait::async_trait;

use crate::feedback::{FeedbackId, FeedbackPatch, FeedbackRecord, NewFeedback};

use super::error::TransportError;

/// A collection of feedback records keyed by id.
///
/// Implementations either succeed completely or return an error; the store
/// never assumes a failed call changed anything.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<FeedbackRecord>, TransportError>;

    /// Store a new record and return it with its assigned id.
    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, TransportError>;

    /// Apply `patch` to the record and return the full record afterwards.
    async fn update(
        &self,
        id: &FeedbackId,
        patch: FeedbackPatch,
    ) -> Result<FeedbackRecord, TransportError>;

    async fn delete(&self, id: &FeedbackId) -> Result<(), TransportError>;
}
