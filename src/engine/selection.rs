//! Selection state machine.
//!
//! Turns raw clicks into actions. A click either changes what is
//! selected or completes an action, after which the selection returns to
//! `Idle`.
//!
//! | State                  | Container `x`         | Tool `t`                         |
//! |------------------------|-----------------------|----------------------------------|
//! | `Idle`                 | select `x`            | select `t` (if tools exist)      |
//! | `ContainerSelected(a)` | `a == x`: deselect; else transfer `a -> x` | apply `t` to `a` |
//! | `ToolSelected(t)`      | apply `t` to `x`      | same tool: deselect; other: switch |

use serde::{Deserialize, Serialize};

use crate::core::{Action, ContainerId};

/// The two external liquid endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Tap,
    Sink,
}

impl Tool {
    /// The action this tool performs on a container.
    #[must_use]
    pub fn action_on(self, id: ContainerId) -> Action {
        match self {
            Tool::Tap => Action::FillFromTap(id),
            Tool::Sink => Action::EmptyToSink(id),
        }
    }
}

/// A raw input event from the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    ContainerClicked(ContainerId),
    ToolClicked(Tool),
}

/// What the player currently has selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    ToolSelected(Tool),
    ContainerSelected(ContainerId),
}

/// Result of feeding one event to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Selection after the event.
    pub next: Selection,

    /// Action to attempt, if the event completed one.
    pub action: Option<Action>,
}

impl Transition {
    fn select(next: Selection) -> Self {
        Self { next, action: None }
    }

    fn perform(action: Action) -> Self {
        Self {
            next: Selection::Idle,
            action: Some(action),
        }
    }
}

impl Selection {
    /// Compute the transition for an event.
    ///
    /// `tools_available` is the level's tap/sink flag: without it a tool
    /// can never become selected. A tool clicked while a container is
    /// selected still yields the tool action, which the rules then treat
    /// as a no-op.
    #[must_use]
    pub fn on_event(&self, event: &InputEvent, tools_available: bool) -> Transition {
        match (self, event) {
            (Selection::Idle, InputEvent::ContainerClicked(id)) => {
                Transition::select(Selection::ContainerSelected(id.clone()))
            }
            (Selection::Idle, InputEvent::ToolClicked(tool)) => {
                if tools_available {
                    Transition::select(Selection::ToolSelected(*tool))
                } else {
                    Transition::select(Selection::Idle)
                }
            }
            (Selection::ContainerSelected(selected), InputEvent::ContainerClicked(id)) => {
                if selected == id {
                    Transition::select(Selection::Idle)
                } else {
                    Transition::perform(Action::transfer(selected.clone(), id.clone()))
                }
            }
            (Selection::ContainerSelected(selected), InputEvent::ToolClicked(tool)) => {
                Transition::perform(tool.action_on(selected.clone()))
            }
            (Selection::ToolSelected(tool), InputEvent::ContainerClicked(id)) => {
                Transition::perform(tool.action_on(id.clone()))
            }
            (Selection::ToolSelected(current), InputEvent::ToolClicked(tool)) => {
                if current == tool {
                    Transition::select(Selection::Idle)
                } else {
                    Transition::select(Selection::ToolSelected(*tool))
                }
            }
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The selected container, if any.
    #[must_use]
    pub fn container(&self) -> Option<&ContainerId> {
        match self {
            Selection::ContainerSelected(id) => Some(id),
            _ => None,
        }
    }

    /// The selected tool, if any.
    #[must_use]
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Selection::ToolSelected(tool) => Some(*tool),
            _ => None,
        }
    }
}
