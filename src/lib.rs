//! # liquid-puzzle
//!
//! State engine for water-jug measuring puzzles: fixed-capacity containers,
//! an optional tap and sink, and a target volume to measure out exactly.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine never renders, plays sounds or owns
//!    a clock. Hosts feed clicks in and read `EngineView` out.
//!
//! 2. **Single Mutator**: Only `PuzzleEngine` writes to the container store,
//!    always through plan, snapshot, write, lock.
//!
//! 3. **Data-Driven Levels**: Levels are plain serde data, validated once
//!    at load time.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Amounts live in an `im::Vector`, so
//!   every undo snapshot is an O(1) structural copy.
//!
//! - **Ticketed Pour-Lock**: Each commit hands out a `LockTicket`. Tickets
//!   are generation-counted, so a release that arrives after a reset or a
//!   level change is ignored.
//!
//! ## Modules
//!
//! - `core`: Container ids, actions, the container store, undo history
//! - `level`: Level definitions, validation, built-in levels, catalog
//! - `rules`: Transfer/tap/sink arithmetic and win evaluation
//! - `hints`: Progressive reveal of the worked solution
//! - `engine`: Selection state machine, pour-lock, `PuzzleEngine`, views

pub mod core;
pub mod level;
pub mod rules;
pub mod hints;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ContainerId, ContainerState, ContainerStateStore, HistoryStack,
    Millilitres, Snapshot, StoreError, ANY_CONTAINER,
};

pub use crate::level::{
    CatalogError, Completion, ContainerDef, Level, LevelCatalog, LevelError, Progress,
    ProgressError, SolutionStep, StepAmounts, TargetContainer, TargetState,
};

pub use crate::rules::{is_solved, plan, target_met, target_status, transfer_volume, PlannedMove};

pub use crate::hints::HintRevealController;

pub use crate::engine::{
    ActionOutcome, Commit, ContainerView, EngineConfig, EngineView, InputEvent, LockRelease,
    LockTicket, PuzzleEngine, ResetOutcome, Selection, TargetView, Tool, UndoOutcome,
};
