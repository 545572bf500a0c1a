//! Intent/reducer plumbing shared by the feedback store and the terminal
//! widgets.
//!
//! ```text
//! collection call ─┐
//!                  ├─→ Intent ─→ Reducer::reduce ─→ Snapshot ─→ watch / App
//! key press ───────┘
//! ```
//!
//! [`crate::store::FeedbackStore`] is the only writer of [`FeedbackState`]:
//! it awaits the collection, then folds the outcome into whatever snapshot is
//! current inside `watch::Sender::send_modify`. The form and the delete
//! dialog use the same traits, but their state lives on the `App` and is
//! reduced in place.
//!
//! [`FeedbackState`]: crate::store::FeedbackState

/// Something that happened: a key press on a widget, or a resolved
/// collection request. Must be movable into the task that resolves it.
pub trait Intent: Send + 'static {}

/// A whole value a reader renders from.
///
/// `Default` is the state before the first load, and what `mem::take` leaves
/// behind while a reducer runs. `PartialEq` lets the app notice when the edit
/// slot moved. `Send` is required to publish through a `watch` channel.
pub trait Snapshot: Clone + PartialEq + Default + Send + 'static {}

/// The one place a snapshot changes.
///
/// `reduce` must not perform I/O. The store calls it with its channel
/// borrowed, so a blocking reducer would stall every reader.
pub trait Reducer {
    type State: Snapshot;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{sample_records, FeedbackId};
    use crate::store::{FeedbackIntent, FeedbackReducer};
    use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};

    fn fold<R: Reducer>(intents: impl IntoIterator<Item = R::Intent>) -> R::State {
        intents
            .into_iter()
            .fold(R::State::default(), |state, intent| R::reduce(state, intent))
    }

    fn session() -> Vec<FeedbackIntent> {
        vec![
            FeedbackIntent::LoadStarted,
            FeedbackIntent::LoadFinished {
                records: sample_records(),
                pending: 0,
            },
            FeedbackIntent::Removed {
                id: FeedbackId::Number(1),
            },
        ]
    }

    #[test]
    fn same_intents_give_same_snapshot() {
        let first = fold::<FeedbackReducer>(session());
        let second = fold::<FeedbackReducer>(session());
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(!first.is_loading);
    }

    #[test]
    fn widgets_fold_from_default() {
        let dialog = fold::<ConfirmReducer>([
            ConfirmIntent::Open {
                id: FeedbackId::Number(2),
                preview: "gone soon".into(),
            },
            ConfirmIntent::Close,
        ]);
        assert_eq!(dialog, ConfirmDialogState::default());
    }
}
