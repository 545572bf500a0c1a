//! Yes/no confirmation shown before a delete reaches the store.

use crate::feedback::FeedbackId;
use crate::mvi::{Intent, Reducer, Snapshot};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        id: FeedbackId,
        preview: String,
        /// Highlighted button; `false` = No.
        yes_selected: bool,
    },
}

impl Snapshot for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Open { id: FeedbackId, preview: String },
    Toggle,
    Close,
}

impl Intent for ConfirmIntent {}

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Open { id, preview } => ConfirmDialogState::Visible {
                id,
                preview,
                yes_selected: false,
            },
            ConfirmIntent::Toggle => match state {
                ConfirmDialogState::Visible {
                    id,
                    preview,
                    yes_selected,
                } => ConfirmDialogState::Visible {
                    id,
                    preview,
                    yes_selected: !yes_selected,
                },
                other => other,
            },
            ConfirmIntent::Close => ConfirmDialogState::Hidden,
        }
    }
}
