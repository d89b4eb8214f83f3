//! The puzzle engine and its interaction plumbing.
//!
//! - `selection`: click state machine
//! - `lock`: generation-counted pour-lock
//! - `engine`: `PuzzleEngine`, the owner of all mutable level state
//! - `view`: serializable presentation snapshot

pub mod config;
pub mod engine;
pub mod lock;
pub mod selection;
pub mod view;

pub use config::EngineConfig;
pub use engine::{ActionOutcome, Commit, LockRelease, PuzzleEngine, ResetOutcome, UndoOutcome};
pub use lock::{LockTicket, PourLock};
pub use selection::{InputEvent, Selection, Transition, Tool};
pub use view::{ContainerView, EngineView, TargetView};
