//! Per-user wizard state.
//!
//! Only sessions with a wizard in progress have an entry: the entry is
//! inserted when a wizard starts and removed when it completes or is
//! interrupted.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::mvi::Reducer;
use crate::wizard::{WizardIntent, WizardReducer, WizardState};

/// Conversation key; one per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub i64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<SessionId, WizardState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wizard state; `Idle` when the session has no entry.
    pub fn get(&self, id: SessionId) -> WizardState {
        self.inner.lock().get(&id).cloned().unwrap_or_default()
    }

    /// Run the wizard reducer for one session and store the result.
    ///
    /// Terminal states (`Idle`, `Completed`) are returned but not kept.
    pub fn dispatch(&self, id: SessionId, intent: WizardIntent) -> WizardState {
        let mut sessions = self.inner.lock();
        let current = sessions.remove(&id).unwrap_or_default();
        let next = WizardReducer::reduce(current, intent);
        if next.is_collecting() {
            sessions.insert(id, next.clone());
        }
        next
    }

    /// Number of sessions with a wizard in progress.
    pub fn active(&self) -> usize {
        self.inner.lock().len()
    }
}
