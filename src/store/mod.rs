//! Feedback store: the one writer of the board's state.
//!
//! Views read snapshots through [`FeedbackStore::subscribe`] or
//! [`FeedbackStore::snapshot`]; every mutation goes through the command
//! methods, which await the collection and then run [`FeedbackReducer`].

mod error;
mod handle;
mod intent;
mod reducer;
mod state;

pub use error::StoreError;
pub use handle::{FeedbackStore, StateReceiver};
pub use intent::FeedbackIntent;
pub use reducer::FeedbackReducer;
pub use state::{EditSlot, FeedbackState};
