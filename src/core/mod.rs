//! Core board types: container ids, actions, the live store, undo history.
//!
//! Everything here is level-agnostic. The store is built from a `Level`
//! but never interprets targets or solution steps.

pub mod container;
pub mod action;
pub mod store;
pub mod history;

pub use container::{ContainerId, ContainerState, Millilitres, ANY_CONTAINER};
pub use action::{Action, ActionKind};
pub use store::{ContainerStateStore, Snapshot, StoreError};
pub use history::HistoryStack;
