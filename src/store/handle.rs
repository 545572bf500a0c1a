//! The single writer of the feedback snapshot.
//!
//! Every operation awaits the collection first and only then publishes a new
//! snapshot, computed by the reducer from whatever snapshot is current at that
//! moment. Readers hold a `watch::Receiver` and always see a whole snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::feedback::{FeedbackDraft, FeedbackId, FeedbackPatch, FeedbackRecord};
use crate::mvi::Reducer;
use crate::remote::{CollectionClient, TransportError};

use super::error::StoreError;
use super::intent::FeedbackIntent;
use super::reducer::FeedbackReducer;
use super::state::FeedbackState;

/// Read side of the store.
pub type StateReceiver = watch::Receiver<FeedbackState>;

/// Cloneable handle to one session's feedback state.
#[derive(Clone)]
pub struct FeedbackStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    client: Arc<dyn CollectionClient>,
    state: watch::Sender<FeedbackState>,
    loads: Mutex<LoadJournal>,
    detached: AtomicBool,
}

/// A committed mutation, remembered while a load is in flight.
enum Change {
    Added(FeedbackRecord),
    Updated(FeedbackRecord),
    Removed(FeedbackId),
}

/// Replays mutations committed after a load was issued onto its response,
/// so a slow list call cannot resurrect a deleted record or drop a new one.
#[derive(Default)]
struct LoadJournal {
    in_flight: usize,
    seq: u64,
    changes: Vec<(u64, Change)>,
}

impl LoadJournal {
    fn begin(&mut self) -> u64 {
        self.in_flight += 1;
        self.seq
    }

    fn record(&mut self, change: Change) {
        if self.in_flight == 0 {
            return;
        }
        self.seq += 1;
        self.changes.push((self.seq, change));
    }

    fn finish(
        &mut self,
        issued: u64,
        mut records: Vec<FeedbackRecord>,
    ) -> (Vec<FeedbackRecord>, usize) {
        for (_, change) in self.changes.iter().filter(|(seq, _)| *seq > issued) {
            match change {
                Change::Added(record) => {
                    if !records.iter().any(|r| r.id == record.id) {
                        records.insert(0, record.clone());
                    }
                }
                Change::Updated(record) => {
                    if let Some(slot) = records.iter_mut().find(|r| r.id == record.id) {
                        *slot = record.clone();
                    }
                }
                Change::Removed(id) => records.retain(|r| &r.id != id),
            }
        }
        let pending = self.abandon();
        (records, pending)
    }

    /// Returns the loads still in flight.
    fn abandon(&mut self) -> usize {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.changes.clear();
        }
        self.in_flight
    }
}

impl FeedbackStore {
    pub fn new(client: Arc<dyn CollectionClient>) -> Self {
        let (state, _) = watch::channel(FeedbackState::default());
        Self {
            inner: Arc::new(StoreInner {
                client,
                state,
                loads: Mutex::new(LoadJournal::default()),
                detached: AtomicBool::new(false),
            }),
        }
    }

    /// Name of the collection client, for display.
    pub fn remote_name(&self) -> &'static str {
        self.inner.client.name()
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> FeedbackState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> StateReceiver {
        self.inner.state.subscribe()
    }

    /// Stop publishing. Calls still in flight resolve, but their results are
    /// discarded instead of applied.
    pub fn detach(&self) {
        if !self.inner.detached.swap(true, Ordering::SeqCst) {
            tracing::debug!("Feedback store detached");
        }
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.load(Ordering::SeqCst)
    }

    /// Replace the board with the collection's records.
    ///
    /// Loads may overlap; `is_loading` stays set until the last one resolves.
    /// The journal lock is held while publishing so the pending count cannot
    /// go stale between the two.
    pub async fn load(&self) -> Result<(), StoreError> {
        let issued = {
            let mut loads = self.inner.loads.lock();
            let issued = loads.begin();
            self.dispatch(FeedbackIntent::LoadStarted);
            issued
        };

        match self.inner.client.list().await {
            Ok(records) => {
                let mut loads = self.inner.loads.lock();
                let (records, pending) = loads.finish(issued, dedupe(records));
                tracing::debug!(
                    client = self.inner.client.name(),
                    count = records.len(),
                    pending,
                    "Feedback loaded"
                );
                self.dispatch(FeedbackIntent::LoadFinished { records, pending });
                Ok(())
            }
            Err(err) => {
                let mut loads = self.inner.loads.lock();
                let pending = loads.abandon();
                tracing::warn!(error = %err, "Failed to load feedback");
                self.dispatch(FeedbackIntent::LoadFailed {
                    message: err.to_string(),
                    pending,
                });
                Err(err.into())
            }
        }
    }

    /// Validate `draft`, create it remotely and prepend the confirmed record.
    pub async fn add(&self, draft: FeedbackDraft) -> Result<FeedbackRecord, StoreError> {
        let feedback = draft.validate()?;

        let record = match self.inner.client.create(feedback).await {
            Ok(record) => record,
            Err(err) => return Err(self.fail("add", err)),
        };

        if self.snapshot().contains(&record.id) {
            let err = TransportError::Protocol(format!(
                "collection assigned id '{}' which is already on the board",
                record.id
            ));
            return Err(self.fail("add", err));
        }

        self.inner.loads.lock().record(Change::Added(record.clone()));
        self.dispatch(FeedbackIntent::Added {
            record: record.clone(),
        });
        tracing::info!(id = %record.id, rating = record.rating.get(), "Feedback added");
        Ok(record)
    }

    /// Delete `id` once the caller has confirmed.
    ///
    /// Returns whether a record was removed. Unconfirmed calls and ids not on
    /// the board are no-ops.
    pub async fn delete(&self, id: &FeedbackId, confirmed: bool) -> Result<bool, StoreError> {
        if !confirmed {
            tracing::debug!(id = %id, "Delete not confirmed");
            return Ok(false);
        }
        if !self.snapshot().contains(id) {
            tracing::debug!(id = %id, "Delete of unknown feedback ignored");
            return Ok(false);
        }

        match self.inner.client.delete(id).await {
            Ok(()) => {}
            // Already gone remotely; converge locally.
            Err(err) if err.is_not_found() => {
                tracing::debug!(id = %id, "Feedback already deleted remotely");
            }
            Err(err) => return Err(self.fail("delete", err)),
        }

        self.inner.loads.lock().record(Change::Removed(id.clone()));
        self.dispatch(FeedbackIntent::Removed { id: id.clone() });
        tracing::info!(id = %id, "Feedback deleted");
        Ok(true)
    }

    /// Put a detached copy of `item` into the edit slot.
    pub fn edit_feedback(&self, item: &FeedbackRecord) {
        tracing::debug!(id = %item.id, "Editing feedback");
        self.dispatch(FeedbackIntent::EditRequested { item: item.clone() });
    }

    pub fn cancel_edit(&self) {
        self.dispatch(FeedbackIntent::EditCancelled);
    }

    pub fn dismiss_error(&self) {
        self.dispatch(FeedbackIntent::ErrorDismissed);
    }

    /// Merge `patch` onto the record, send it, and store the confirmed result.
    ///
    /// On success the edit slot returns to idle. A missing target fails with
    /// `NotFound` and clears a slot pointing at it.
    pub async fn update(
        &self,
        id: &FeedbackId,
        patch: FeedbackPatch,
    ) -> Result<FeedbackRecord, StoreError> {
        patch.validate()?;

        let Some(current) = self.snapshot().find(id).cloned() else {
            return Err(self.missing(id));
        };
        let merged = current.merged(&patch);

        let record = match self
            .inner
            .client
            .update(id, FeedbackPatch::from(&merged))
            .await
        {
            Ok(record) => record,
            Err(err) if err.is_not_found() => return Err(self.missing(id)),
            Err(err) => return Err(self.fail("update", err)),
        };

        if &record.id != id {
            let err = TransportError::Protocol(format!(
                "update of '{}' returned record '{}'",
                id, record.id
            ));
            return Err(self.fail("update", err));
        }

        if !self.snapshot().contains(id) {
            tracing::debug!(id = %id, "Discarding update for feedback removed meanwhile");
            return Err(self.missing(id));
        }

        self.inner.loads.lock().record(Change::Updated(record.clone()));
        self.dispatch(FeedbackIntent::Updated {
            record: record.clone(),
        });
        tracing::info!(id = %id, rating = record.rating.get(), "Feedback updated");
        Ok(record)
    }

    fn dispatch(&self, intent: FeedbackIntent) -> bool {
        if self.is_detached() {
            tracing::debug!(?intent, "Store detached, discarding transition");
            return false;
        }
        tracing::trace!(?intent, "Applying transition");
        self.inner.state.send_modify(|state| {
            *state = FeedbackReducer::reduce(std::mem::take(state), intent);
        });
        true
    }

    fn fail(&self, operation: &'static str, err: TransportError) -> StoreError {
        tracing::warn!(operation, error = %err, "Collection request failed");
        self.dispatch(FeedbackIntent::OperationFailed {
            message: err.to_string(),
        });
        StoreError::Transport(err)
    }

    fn missing(&self, id: &FeedbackId) -> StoreError {
        tracing::debug!(id = %id, "Update target not found");
        self.dispatch(FeedbackIntent::UpdateTargetMissing { id: id.clone() });
        StoreError::NotFound { id: id.clone() }
    }
}

/// Keep the first record for each id.
fn dedupe(records: Vec<FeedbackRecord>) -> Vec<FeedbackRecord> {
    let mut unique: Vec<FeedbackRecord> = Vec::with_capacity(records.len());
    for record in records {
        if unique.iter().any(|r| r.id == record.id) {
            tracing::warn!(id = %record.id, "Collection returned a duplicate id, skipping");
            continue;
        }
        unique.push(record);
    }
    unique
}
