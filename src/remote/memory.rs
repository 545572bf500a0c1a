//! In-process collection.
//!
//! Backs the local-only variant (random UUID ids, no network) and the
//! `serve` endpoint (sequential integer ids, like the mock JSON server the
//! board was developed against).

use std::cmp::Ordering;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Deserialize;

use crate::feedback::{FeedbackId, FeedbackPatch, FeedbackRecord, NewFeedback};

use super::client::CollectionClient;
use super::error::TransportError;

/// How new records get their id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// 1, 2, 3, ... continuing after the highest numeric id present.
    Sequential,
    /// UUID v4 strings.
    Random,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Id,
    Rating,
    Text,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

pub struct MemoryCollection {
    inner: Mutex<MemoryInner>,
}

struct MemoryInner {
    /// Insertion order, oldest first.
    records: Vec<FeedbackRecord>,
    next_id: u64,
    strategy: IdStrategy,
}

impl MemoryInner {
    fn contains(&self, id: &FeedbackId) -> bool {
        self.records.iter().any(|r| &r.id == id)
    }

    fn allocate_id(&mut self) -> FeedbackId {
        match self.strategy {
            IdStrategy::Sequential => {
                let mut id = FeedbackId::Number(self.next_id);
                while self.contains(&id) {
                    self.next_id += 1;
                    id = FeedbackId::Number(self.next_id);
                }
                self.next_id += 1;
                id
            }
            IdStrategy::Random => loop {
                let id = FeedbackId::random();
                if !self.contains(&id) {
                    break id;
                }
            },
        }
    }
}

impl MemoryCollection {
    pub fn new(strategy: IdStrategy) -> Self {
        Self::with_records(strategy, Vec::new())
    }

    /// `records` are given oldest first. Duplicate ids keep the first copy.
    pub fn with_records(strategy: IdStrategy, records: Vec<FeedbackRecord>) -> Self {
        let mut unique: Vec<FeedbackRecord> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id == record.id) {
                tracing::warn!(id = %record.id, "Skipping duplicate seed record");
                continue;
            }
            unique.push(record);
        }

        let next_id = unique
            .iter()
            .filter_map(|r| match r.id {
                FeedbackId::Number(n) => Some(n),
                FeedbackId::Text(_) => None,
            })
            .max()
            .map_or(1, |max| max + 1);

        Self {
            inner: Mutex::new(MemoryInner {
                records: unique,
                next_id,
                strategy,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &FeedbackId) -> Option<FeedbackRecord> {
        self.inner
            .lock()
            .records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    }

    /// Newest first.
    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.inner.lock().records.iter().rev().cloned().collect()
    }

    pub fn sorted(&self, key: SortKey, order: SortOrder) -> Vec<FeedbackRecord> {
        let mut records = self.inner.lock().records.clone();
        records.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        records
    }

    pub fn insert(&self, feedback: NewFeedback) -> FeedbackRecord {
        let mut inner = self.inner.lock();
        let record = FeedbackRecord {
            id: inner.allocate_id(),
            text: feedback.text,
            rating: feedback.rating,
        };
        inner.records.push(record.clone());
        record
    }

    pub fn patch(&self, id: &FeedbackId, patch: &FeedbackPatch) -> Option<FeedbackRecord> {
        let mut inner = self.inner.lock();
        let record = inner.records.iter_mut().find(|r| &r.id == id)?;
        *record = record.merged(patch);
        Some(record.clone())
    }

    pub fn remove(&self, id: &FeedbackId) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.records.len();
        inner.records.retain(|r| &r.id != id);
        inner.records.len() != before
    }
}

fn compare(a: &FeedbackRecord, b: &FeedbackRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Rating => a.rating.cmp(&b.rating).then_with(|| a.id.cmp(&b.id)),
        SortKey::Text => a.text.cmp(&b.text).then_with(|| a.id.cmp(&b.id)),
    }
}

#[async_trait]
impl CollectionClient for MemoryCollection {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<FeedbackRecord>, TransportError> {
        Ok(self.records())
    }

    async fn create(&self, feedback: NewFeedback) -> Result<FeedbackRecord, TransportError> {
        Ok(self.insert(feedback))
    }

    async fn update(
        &self,
        id: &FeedbackId,
        patch: FeedbackPatch,
    ) -> Result<FeedbackRecord, TransportError> {
        self.patch(id, &patch)
            .ok_or_else(|| TransportError::NotFound { id: id.clone() })
    }

    async fn delete(&self, id: &FeedbackId) -> Result<(), TransportError> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(TransportError::NotFound { id: id.clone() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{sample_records, Rating};

    fn new_feedback(text: &str, rating: u8) -> NewFeedback {
        NewFeedback {
            text: text.to_string(),
            rating: Rating::new(rating).unwrap(),
        }
    }

    #[test]
    fn sequential_ids_continue_after_seed() {
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, sample_records());
        let record = collection.insert(new_feedback("fourth", 6));
        assert_eq!(record.id, FeedbackId::Number(4));
    }

    #[test]
    fn random_ids_are_text() {
        let collection = MemoryCollection::new(IdStrategy::Random);
        let a = collection.insert(new_feedback("a", 1));
        let b = collection.insert(new_feedback("b", 2));
        assert!(matches!(a.id, FeedbackId::Text(_)));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn records_are_newest_first() {
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, sample_records());
        collection.insert(new_feedback("latest", 9));
        let records = collection.records();
        assert_eq!(records[0].text, "latest");
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn sorted_by_rating_ascending() {
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, sample_records());
        let ratings: Vec<u8> = collection
            .sorted(SortKey::Rating, SortOrder::Asc)
            .iter()
            .map(|r| r.rating.get())
            .collect();
        assert_eq!(ratings, vec![5, 8, 10]);
    }

    #[test]
    fn sorted_by_id_descending() {
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, sample_records());
        let ids: Vec<FeedbackId> = collection
            .sorted(SortKey::Id, SortOrder::Desc)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![3.into(), 2.into(), 1.into()]);
    }

    #[test]
    fn duplicate_seed_ids_are_dropped() {
        let mut records = sample_records();
        records.push(records[0].clone());
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, records);
        assert_eq!(collection.len(), 3);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let collection = MemoryCollection::new(IdStrategy::Sequential);
        let err = collection.delete(&FeedbackId::Number(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_merges_patch() {
        let collection = MemoryCollection::with_records(IdStrategy::Sequential, sample_records());
        let updated = collection
            .update(
                &FeedbackId::Number(2),
                FeedbackPatch::default().with_text("changed"),
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "changed");
        assert_eq!(updated.rating.get(), 8);
        assert_eq!(collection.get(&FeedbackId::Number(2)), Some(updated));
    }
}
