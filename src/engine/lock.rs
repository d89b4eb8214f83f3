//! Pour-lock: the cool-down after a committed action.
//!
//! The engine does not own a clock. Engaging the lock hands out a
//! `LockTicket`; the host waits `cool_down` and presents the ticket back.
//! Every engage and every invalidation bumps a generation counter, so a
//! ticket from before a level load or reset can never unlock the board.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Proof of one specific lock engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LockTicket {
    generation: u64,
    cool_down: Duration,
}

impl LockTicket {
    /// How long the host should wait before releasing.
    #[must_use]
    pub fn cool_down(&self) -> Duration {
        self.cool_down
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Generation-counted lock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PourLock {
    generation: u64,
    engaged: bool,
}

impl PourLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Lock and return the ticket that unlocks this engagement.
    pub fn engage(&mut self, cool_down: Duration) -> LockTicket {
        self.generation += 1;
        self.engaged = true;
        LockTicket {
            generation: self.generation,
            cool_down,
        }
    }

    /// Release if `ticket` belongs to the current engagement.
    ///
    /// Returns false for stale tickets and when not engaged.
    pub fn release(&mut self, ticket: LockTicket) -> bool {
        if !self.engaged || ticket.generation != self.generation {
            return false;
        }
        self.engaged = false;
        true
    }

    /// Unlock and make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.engaged = false;
    }
}
