//! Engine configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cool-down after each committed action (default: 600 ms).
    /// Input, undo, reset and win evaluation wait for it to pass.
    pub pour_lock: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pour_lock: Duration::from_millis(600),
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom cool-down.
    #[must_use]
    pub fn with_pour_lock(mut self, pour_lock: Duration) -> Self {
        self.pour_lock = pour_lock;
        self
    }
}
