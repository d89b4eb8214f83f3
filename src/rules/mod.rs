//! Puzzle rules: action arithmetic and win evaluation.
//!
//! Both halves are pure functions over the board. The engine calls into
//! them but the rules never mutate state themselves.

pub mod moves;
pub mod win;

pub use moves::{plan, transfer_volume, PlannedMove};
pub use win::{is_solved, target_met, target_status, StepBoard, VolumeSource};
