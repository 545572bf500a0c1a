use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::oneshot;

use crate::feedback::FeedbackRecord;
use crate::mvi::Reducer;
use crate::store::{FeedbackState, FeedbackStore, StoreError};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::form::{FormIntent, FormReducer, FormState, FormSubmission};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Terminal front end over one store.
///
/// Store operations run on the tokio runtime; the app only renders the
/// snapshot it last pulled in [`App::sync`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: FeedbackStore,
    runtime: Handle,
    snapshot: FeedbackState,
    selected: usize,
    form: FormState,
    /// Outcome of a submitted create; the form keeps its text until it lands.
    pending_create: Option<oneshot::Receiver<bool>>,
    confirm: ConfirmDialogState,
}

impl App {
    pub fn new(store: FeedbackStore, runtime: Handle) -> Self {
        let snapshot = store.snapshot();
        Self {
            should_quit: false,
            focus: Focus::List,
            store,
            runtime,
            snapshot,
            selected: 0,
            form: FormState::default(),
            pending_create: None,
            confirm: ConfirmDialogState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_form(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn remote_name(&self) -> &'static str {
        self.store.remote_name()
    }

    pub fn snapshot(&self) -> &FeedbackState {
        &self.snapshot
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn confirm(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_record(&self) -> Option<&FeedbackRecord> {
        self.snapshot.records.get(self.selected)
    }

    /// Pull the latest snapshot; rebind the form if the edit slot changed.
    pub fn sync(&mut self) {
        // Before reading, so a settled create is never paired with an older snapshot.
        self.settle_create();
        let next = self.store.snapshot();
        if next.edit != self.snapshot.edit {
            match next.edit.item() {
                Some(item) => {
                    dispatch_mvi!(self, form, FormReducer, FormIntent::Bind { item: item.clone() });
                    self.focus = Focus::Form;
                }
                None => {
                    dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
                }
            }
        }
        self.snapshot = next;
        self.selected = self.selected.min(self.snapshot.len().saturating_sub(1));
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.snapshot.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn reload(&self) {
        let store = self.store.clone();
        self.spawn_op("load", async move { store.load().await });
    }

    pub fn edit_selected(&mut self) {
        if let Some(record) = self.selected_record().cloned() {
            self.store.edit_feedback(&record);
            self.sync();
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(record) = self.selected_record() {
            let intent = ConfirmIntent::Open {
                id: record.id.clone(),
                preview: record.text.clone(),
            };
            dispatch_mvi!(self, confirm, ConfirmReducer, intent);
        }
    }

    pub fn toggle_confirm(&mut self) {
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Toggle);
    }

    /// Close the dialog and hand the answer to the store.
    pub fn resolve_confirm(&mut self, confirmed: bool) {
        let ConfirmDialogState::Visible { id, .. } = &self.confirm else {
            return;
        };
        let id = id.clone();
        dispatch_mvi!(self, confirm, ConfirmReducer, ConfirmIntent::Close);
        let store = self.store.clone();
        self.spawn_op("delete", async move { store.delete(&id, confirmed).await });
    }

    pub fn accept_highlighted(&mut self) {
        let yes = matches!(
            self.confirm,
            ConfirmDialogState::Visible {
                yes_selected: true,
                ..
            }
        );
        self.resolve_confirm(yes);
    }

    pub fn form_input(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn submit_form(&mut self) {
        match self.form.submission() {
            Err(err) => {
                let message = err.to_string();
                dispatch_mvi!(self, form, FormReducer, FormIntent::Rejected { message });
            }
            Ok(FormSubmission::Create(_)) if self.is_creating() => {
                tracing::debug!("Create already in flight, ignoring submit");
            }
            // The form resets once the store confirms the record.
            Ok(FormSubmission::Create(draft)) => {
                let (done, outcome) = oneshot::channel();
                let store = self.store.clone();
                self.spawn_op("add", async move {
                    let result = store.add(draft).await;
                    let _ = done.send(result.is_ok());
                    result
                });
                self.pending_create = Some(outcome);
            }
            // The form resets once the store clears the edit slot.
            Ok(FormSubmission::Update { id, patch }) => {
                let store = self.store.clone();
                self.spawn_op("update", async move { store.update(&id, patch).await });
            }
        }
    }

    pub fn is_creating(&self) -> bool {
        self.pending_create.is_some()
    }

    /// Reset the create form after a confirmed add. A failed add keeps the
    /// typed text so it can be resubmitted.
    fn settle_create(&mut self) {
        let Some(outcome) = self.pending_create.as_mut() else {
            return;
        };
        let added = match outcome.try_recv() {
            Ok(added) => added,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => false,
        };
        self.pending_create = None;
        if added && !self.form.is_updating() {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
        }
    }

    pub fn cancel_form(&mut self) {
        if self.form.is_updating() {
            self.store.cancel_edit();
            self.sync();
        } else {
            dispatch_mvi!(self, form, FormReducer, FormIntent::Reset);
        }
        self.focus = Focus::List;
    }

    pub fn dismiss_error(&mut self) {
        self.store.dismiss_error();
        self.sync();
    }

    /// Results of calls still in flight are dropped after this.
    pub fn shutdown(&self) {
        self.store.detach();
    }

    fn spawn_op<F, T>(&self, operation: &'static str, op: F)
    where
        F: Future<Output = Result<T, StoreError>> + Send + 'static,
        T: Send + 'static,
    {
        self.runtime.spawn(async move {
            if let Err(err) = op.await {
                tracing::debug!(operation, error = %err, "Store operation failed");
            }
        });
    }
}
