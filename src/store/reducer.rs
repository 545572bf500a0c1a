use crate::mvi::Reducer;

use super::intent::FeedbackIntent;
use super::state::{EditSlot, FeedbackState};

pub struct FeedbackReducer;

impl Reducer for FeedbackReducer {
    type State = FeedbackState;
    type Intent = FeedbackIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedbackIntent::LoadStarted => FeedbackState {
                is_loading: true,
                ..state
            },

            FeedbackIntent::LoadFinished { records, pending } => {
                let edit = match state.edit {
                    EditSlot::Editing { item } if !records.iter().any(|r| r.id == item.id) => {
                        EditSlot::Idle
                    }
                    other => other,
                };
                FeedbackState {
                    records,
                    is_loading: pending > 0,
                    edit,
                    error: None,
                }
            }

            FeedbackIntent::LoadFailed { message, pending } => FeedbackState {
                is_loading: pending > 0,
                error: Some(message),
                ..state
            },

            FeedbackIntent::Added { record } => {
                // Ids stay unique; a duplicate is ignored.
                if state.contains(&record.id) {
                    return state;
                }
                let mut records = Vec::with_capacity(state.records.len() + 1);
                records.push(record);
                records.extend(state.records);
                FeedbackState {
                    records,
                    error: None,
                    ..state
                }
            }

            FeedbackIntent::Removed { id } => {
                let mut records = state.records;
                records.retain(|r| r.id != id);
                let edit = if state.edit.targets(&id) {
                    EditSlot::Idle
                } else {
                    state.edit
                };
                FeedbackState {
                    records,
                    edit,
                    error: None,
                    ..state
                }
            }

            FeedbackIntent::EditRequested { item } => FeedbackState {
                edit: EditSlot::Editing { item },
                ..state
            },

            FeedbackIntent::EditCancelled => FeedbackState {
                edit: EditSlot::Idle,
                ..state
            },

            FeedbackIntent::Updated { record } => {
                let Some(index) = state.records.iter().position(|r| r.id == record.id) else {
                    // Response for a record that is gone.
                    return state;
                };
                let mut records = state.records;
                records[index] = record;
                FeedbackState {
                    records,
                    edit: EditSlot::Idle,
                    error: None,
                    ..state
                }
            }

            FeedbackIntent::UpdateTargetMissing { id } => {
                let edit = if state.edit.targets(&id) {
                    EditSlot::Idle
                } else {
                    state.edit
                };
                FeedbackState {
                    edit,
                    error: Some(format!("Feedback '{}' no longer exists", id)),
                    ..state
                }
            }

            FeedbackIntent::OperationFailed { message } => FeedbackState {
                error: Some(message),
                ..state
            },

            FeedbackIntent::ErrorDismissed => FeedbackState {
                error: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{sample_records, FeedbackId, FeedbackRecord, Rating};

    fn loaded() -> FeedbackState {
        FeedbackReducer::reduce(
            FeedbackState::default(),
            FeedbackIntent::LoadFinished {
                records: sample_records(),
                pending: 0,
            },
        )
    }

    fn record(id: u64, text: &str, rating: u8) -> FeedbackRecord {
        FeedbackRecord {
            id: FeedbackId::Number(id),
            text: text.to_string(),
            rating: Rating::new(rating).unwrap(),
        }
    }

    #[test]
    fn load_started_sets_loading() {
        let state = FeedbackReducer::reduce(FeedbackState::default(), FeedbackIntent::LoadStarted);
        assert!(state.is_loading);
    }

    #[test]
    fn load_failed_clears_loading_and_keeps_records() {
        let state = FeedbackReducer::reduce(loaded(), FeedbackIntent::LoadStarted);
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::LoadFailed {
                message: "offline".into(),
                pending: 0,
            },
        );
        assert!(!state.is_loading);
        assert_eq!(state.len(), 3);
        assert_eq!(state.error.as_deref(), Some("offline"));
    }

    #[test]
    fn added_prepends() {
        let state = FeedbackReducer::reduce(
            loaded(),
            FeedbackIntent::Added {
                record: record(4, "new", 6),
            },
        );
        assert_eq!(state.len(), 4);
        assert_eq!(state.records[0].text, "new");
    }

    #[test]
    fn added_duplicate_is_ignored() {
        let before = loaded();
        let state = FeedbackReducer::reduce(
            before.clone(),
            FeedbackIntent::Added {
                record: record(2, "dup", 1),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn removed_absent_id_is_noop() {
        let before = loaded();
        let state = FeedbackReducer::reduce(
            before.clone(),
            FeedbackIntent::Removed {
                id: FeedbackId::Number(99),
            },
        );
        assert_eq!(state.records, before.records);
    }

    #[test]
    fn removing_edited_record_resets_slot() {
        let state = FeedbackReducer::reduce(
            loaded(),
            FeedbackIntent::EditRequested {
                item: record(1, "This item is from feedback 1", 10),
            },
        );
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::Removed {
                id: FeedbackId::Number(1),
            },
        );
        assert_eq!(state.edit, EditSlot::Idle);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn second_edit_replaces_first() {
        let first = record(1, "a", 1);
        let second = record(2, "b", 2);
        let state = FeedbackReducer::reduce(loaded(), FeedbackIntent::EditRequested { item: first });
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::EditRequested {
                item: second.clone(),
            },
        );
        assert_eq!(state.edit, EditSlot::Editing { item: second });
    }

    #[test]
    fn edit_does_not_touch_records() {
        let before = loaded();
        let state = FeedbackReducer::reduce(
            before.clone(),
            FeedbackIntent::EditRequested {
                item: record(3, "changed in the slot only", 1),
            },
        );
        assert_eq!(state.records, before.records);
    }

    #[test]
    fn updated_replaces_and_returns_to_idle() {
        let state = FeedbackReducer::reduce(
            loaded(),
            FeedbackIntent::EditRequested {
                item: record(2, "This item is from feedback 2", 8),
            },
        );
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::Updated {
                record: record(2, "edited", 8),
            },
        );
        assert_eq!(state.find(&FeedbackId::Number(2)).unwrap().text, "edited");
        assert!(!state.edit.is_editing());
        assert_eq!(state.records[1].id, FeedbackId::Number(2));
    }

    #[test]
    fn updated_for_missing_record_is_discarded() {
        let before = loaded();
        let state = FeedbackReducer::reduce(
            before.clone(),
            FeedbackIntent::Updated {
                record: record(42, "ghost", 3),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn missing_update_target_clears_slot_and_reports() {
        let state = FeedbackReducer::reduce(
            loaded(),
            FeedbackIntent::EditRequested {
                item: record(7, "stale", 4),
            },
        );
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::UpdateTargetMissing {
                id: FeedbackId::Number(7),
            },
        );
        assert_eq!(state.edit, EditSlot::Idle);
        assert!(state.error.is_some());
    }

    #[test]
    fn load_clears_stale_slot() {
        let state = FeedbackReducer::reduce(
            FeedbackState::default(),
            FeedbackIntent::EditRequested {
                item: record(9, "gone", 4),
            },
        );
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::LoadFinished {
                records: sample_records(),
                pending: 0,
            },
        );
        assert_eq!(state.edit, EditSlot::Idle);
    }

    #[test]
    fn error_dismissed() {
        let state = FeedbackReducer::reduce(
            loaded(),
            FeedbackIntent::OperationFailed {
                message: "boom".into(),
            },
        );
        let state = FeedbackReducer::reduce(state, FeedbackIntent::ErrorDismissed);
        assert_eq!(state.error, None);
    }

    #[test]
    fn overlapping_load_keeps_loading_flag() {
        let state = FeedbackReducer::reduce(FeedbackState::default(), FeedbackIntent::LoadStarted);
        let state = FeedbackReducer::reduce(state, FeedbackIntent::LoadStarted);
        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::LoadFinished {
                records: sample_records(),
                pending: 1,
            },
        );
        assert!(state.is_loading);
        assert_eq!(state.len(), 3);

        let state = FeedbackReducer::reduce(
            state,
            FeedbackIntent::LoadFailed {
                message: "offline".into(),
                pending: 0,
            },
        );
        assert!(!state.is_loading);
    }
}
