//! Action representation.
//!
//! There are exactly three things a player can do to the board:
//! - pour one container into another (`Transfer`)
//! - fill a container from the tap (`FillFromTap`)
//! - empty a container into the sink (`EmptyToSink`)
//!
//! `ActionKind` is the coarse classification reported to feedback
//! collaborators (audio cues, animations) after a commit.

use serde::{Deserialize, Serialize};

use super::container::ContainerId;

/// A player action on the board.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::core::{Action, ActionKind, ContainerId};
///
/// let pour = Action::transfer("c1", "c2");
/// assert_eq!(pour.kind(), ActionKind::Transfer);
///
/// let fill = Action::FillFromTap(ContainerId::new("c1"));
/// assert_eq!(fill.kind(), ActionKind::Tap);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Transfer { from: ContainerId, to: ContainerId },
    FillFromTap(ContainerId),
    EmptyToSink(ContainerId),
}

impl Action {
    /// Pour `from` into `to`.
    pub fn transfer(from: impl Into<ContainerId>, to: impl Into<ContainerId>) -> Self {
        Action::Transfer {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Classify the action for feedback purposes.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Transfer { .. } => ActionKind::Transfer,
            Action::FillFromTap(_) => ActionKind::Tap,
            Action::EmptyToSink(_) => ActionKind::Sink,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Transfer { from, to } => write!(f, "transfer {} -> {}", from, to),
            Action::FillFromTap(id) => write!(f, "tap -> {}", id),
            Action::EmptyToSink(id) => write!(f, "{} -> sink", id),
        }
    }
}

/// Distinguishable kind of a committed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Transfer,
    Tap,
    Sink,
}

impl ActionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActionKind::Transfer => "transfer",
            ActionKind::Tap => "tap",
            ActionKind::Sink => "sink",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
