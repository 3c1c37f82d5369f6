use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::actions::Action;
use crate::reducer::{reducer, StoreState};

pub type Snapshot = Arc<StoreState>;

/// Single source of truth for patients and diagnoses.
///
/// Cloning a `Store` yields another handle to the same state. Readers get immutable
/// snapshots; the only way to change state is [`Dispatcher::dispatch`].
#[derive(Debug, Clone)]
pub struct Store {
    sender: Arc<watch::Sender<Snapshot>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> Self {
        let (sender, _) = watch::channel(Arc::new(state));
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Current snapshot. Later dispatches never modify a snapshot already handed out.
    pub fn state(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Snapshot plus a dispatch handle, the pair every consumer works with.
    pub fn state_value(&self) -> (Snapshot, Dispatcher) {
        (self.state(), self.dispatcher())
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatcher().dispatch(action);
    }

    /// Receives a new snapshot after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }
}

/// Write-only handle into a [`Store`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: Arc<watch::Sender<Snapshot>>,
}

impl Dispatcher {
    /// Applies the action synchronously. The new snapshot is visible to every reader as soon
    /// as this returns, and no other dispatch can interleave with the reduction.
    pub fn dispatch(&self, action: Action) {
        let name = action.name();
        self.sender.send_modify(|current| {
            let next = reducer((**current).clone(), action);
            *current = Arc::new(next);
        });

        let state = self.sender.borrow();
        debug!(
            action = name,
            patients = state.patient_count(),
            diagnoses = state.diagnosis_count(),
            "Dispatched action"
        );
    }
}
