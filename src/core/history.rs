//! Undo history.
//!
//! One snapshot is pushed before every committed action. The stack only
//! shrinks through `pop` (undo) or `clear` (reset/load).

use serde::{Deserialize, Serialize};

use super::store::Snapshot;

/// Stack of pre-action board snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<Snapshot>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the board as it was before an action.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
