use crate::feedback::{FeedbackId, FeedbackRecord, FeedbackStats};
use crate::mvi::Snapshot;

/// The record targeted by the edit form, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSlot {
    /// Form is in create mode.
    #[default]
    Idle,
    /// Form is bound to a detached copy of one record.
    Editing { item: FeedbackRecord },
}

impl EditSlot {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn item(&self) -> Option<&FeedbackRecord> {
        match self {
            Self::Editing { item } => Some(item),
            Self::Idle => None,
        }
    }

    pub fn targets(&self, id: &FeedbackId) -> bool {
        self.item().is_some_and(|item| &item.id == id)
    }
}

/// Everything a view renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackState {
    /// Newest first.
    pub records: Vec<FeedbackRecord>,
    /// True only while a load is in flight.
    pub is_loading: bool,
    pub edit: EditSlot,
    /// Last failed operation, shown as a dismissable banner.
    pub error: Option<String>,
}

impl Snapshot for FeedbackState {}

impl FeedbackState {
    pub fn find(&self, id: &FeedbackId) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &FeedbackId) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> FeedbackStats {
        FeedbackStats::from_records(&self.records)
    }
}
