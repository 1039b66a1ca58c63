//! Match storage.
//!
//! [`MatchRepository`] is the contract any store must satisfy; the
//! in-memory [`MatchStore`] keeps everything behind one mutex so id
//! assignment and participant counters never race between sessions.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use super::model::{Match, MatchId, NewMatch};
use super::sport::Sport;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Match {id} not found")]
    NotFound { id: MatchId },

    #[error("No match id left after {last}")]
    IdsExhausted { last: MatchId },
}

/// Storage operations used by the router.
pub trait MatchRepository: Send + Sync {
    /// Matches of one sport in insertion order. Empty when none exist.
    fn all_by_sport(&self, sport: Sport) -> Vec<Match>;

    /// Snapshot of a single match.
    fn by_id(&self, id: MatchId) -> Result<Match, StoreError>;

    /// Store a new match under `max(id) + 1` and return it.
    fn append(&self, new_match: NewMatch) -> Result<Match, StoreError>;

    /// Add one participant unless the match is full.
    ///
    /// Returns `Ok(true)` when the counter moved, `Ok(false)` when the
    /// match was already full.
    fn increment_participant(&self, id: MatchId) -> Result<bool, StoreError>;
}

/// Volatile store shared by all sessions.
#[derive(Clone, Default)]
pub struct MatchStore {
    inner: Arc<Mutex<Vec<Match>>>,
}

impl MatchStore {
    pub fn new(matches: Vec<Match>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(matches)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl MatchRepository for MatchStore {
    fn all_by_sport(&self, sport: Sport) -> Vec<Match> {
        self.inner
            .lock()
            .iter()
            .filter(|m| m.sport == sport)
            .cloned()
            .collect()
    }

    fn by_id(&self, id: MatchId) -> Result<Match, StoreError> {
        self.inner
            .lock()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    fn append(&self, new_match: NewMatch) -> Result<Match, StoreError> {
        let mut matches = self.inner.lock();
        let last = matches.iter().map(|m| m.id).max().unwrap_or(0);
        let id = last.checked_add(1).ok_or(StoreError::IdsExhausted { last })?;
        let stored = new_match.with_id(id);
        matches.push(stored.clone());

        tracing::info!(
            match_id = id,
            sport = stored.sport.code(),
            status = ?stored.status,
            "Match created"
        );
        if let Ok(dump) = serde_json::to_string(&stored) {
            tracing::trace!(match_json = %dump, "Match record");
        }

        Ok(stored)
    }

    fn increment_participant(&self, id: MatchId) -> Result<bool, StoreError> {
        let mut matches = self.inner.lock();
        let record = matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if record.is_full() {
            tracing::debug!(match_id = id, "Match already full");
            return Ok(false);
        }

        record.players_current += 1;
        tracing::info!(
            match_id = id,
            players_current = record.players_current,
            players_total = record.players_total,
            "Participant added"
        );
        Ok(true)
    }
}
