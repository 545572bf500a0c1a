//! Edit form: create mode by default, update mode while bound to a record.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormField, FormMode, FormState, FormSubmission, MAX_TEXT_LEN};
pub use view::render_form;
