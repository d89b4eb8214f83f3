//! The puzzle engine: selection, commits, undo, reset, lock, hints.
//!
//! `PuzzleEngine` owns everything for the active level and is the only
//! code that mutates the container store. Every mutation follows the
//! same sequence:
//!
//! 1. plan the action against the board (rules, pure)
//! 2. push the pre-action snapshot onto the history
//! 3. write the planned amounts
//! 4. engage the pour-lock and hand out a ticket
//!
//! Win evaluation runs when the ticket is presented back, never while
//! the lock is engaged.

use serde::{Deserialize, Serialize};

use crate::core::{
    Action, ActionKind, ContainerId, ContainerStateStore, HistoryStack, Millilitres, StoreError,
};
use crate::hints::HintRevealController;
use crate::level::{Level, LevelError, SolutionStep};
use crate::rules;

use super::config::EngineConfig;
use super::lock::{LockTicket, PourLock};
use super::selection::{InputEvent, Selection, Tool};

/// A committed action, as reported to feedback collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub action: Action,

    /// Audio/animation cue selector.
    pub kind: ActionKind,

    /// Liquid moved, added or drained.
    pub volume: Millilitres,

    /// Present this back via `release_lock` after `ticket.cool_down()`.
    pub ticket: LockTicket,
}

/// Result of an input event or a direct action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Dropped because the pour-lock is engaged. Nothing changed.
    Locked,
    /// Only the selection changed.
    Selected,
    /// The action would have changed nothing. Board and history untouched.
    NoOp(Action),
    Committed(Commit),
}

impl ActionOutcome {
    /// The commit, if the board changed.
    #[must_use]
    pub fn commit(&self) -> Option<&Commit> {
        match self {
            ActionOutcome::Committed(commit) => Some(commit),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, ActionOutcome::Committed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    Locked,
    /// Nothing to undo.
    Empty,
    Restored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Locked,
    Reset,
}

/// Result of presenting a lock ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockRelease {
    /// The ticket predates a load/reset or was already used.
    Stale,
    /// Unlocked; the win evaluation ran.
    Released { solved: bool },
}

/// State engine for one active level.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::engine::{LockRelease, PuzzleEngine};
/// use liquid_puzzle::level::{ContainerDef, Level, TargetState};
///
/// let level = Level::new(1, "Simple arithmetic")
///     .with_container(ContainerDef::new("c1", "Big jug", 500).full())
///     .with_container(ContainerDef::new("c2", "Small jug", 300))
///     .with_target(TargetState::container("c1", 200));
///
/// let mut engine = PuzzleEngine::with_default_config(level).unwrap();
/// engine.click_container("c1");
/// let outcome = engine.click_container("c2");
///
/// let ticket = outcome.commit().unwrap().ticket;
/// assert!(engine.is_locked());
/// assert_eq!(engine.release_lock(ticket), LockRelease::Released { solved: true });
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    config: EngineConfig,
    level: Level,
    store: ContainerStateStore,
    history: HistoryStack,
    selection: Selection,
    lock: PourLock,
    hints: HintRevealController,
    solved: bool,
}

fn validated(level: Level) -> Result<Level, LevelError> {
    if let Err(err) = level.validate() {
        log::warn!("rejecting level {} ({}): {}", level.id, level.title, err);
        return Err(err);
    }
    if !level.solution_reaches_targets() {
        log::warn!(
            "level {} ({}): final solution step does not satisfy the targets",
            level.id,
            level.title
        );
    }
    Ok(level)
}

impl PuzzleEngine {
    /// Validate `level` and start it.
    pub fn new(level: Level, config: EngineConfig) -> Result<Self, LevelError> {
        let level = validated(level)?;
        let mut engine = Self {
            config,
            store: ContainerStateStore::from_valid(&level),
            history: HistoryStack::new(),
            selection: Selection::Idle,
            lock: PourLock::new(),
            hints: HintRevealController::new(level.solution_steps.len()),
            solved: false,
            level,
        };
        log::info!("loaded level {} ({})", engine.level.id, engine.level.title);
        engine.evaluate();
        Ok(engine)
    }

    pub fn with_default_config(level: Level) -> Result<Self, LevelError> {
        Self::new(level, EngineConfig::default())
    }

    /// Replace the active level.
    ///
    /// Store, history, selection and hints are rebuilt; any outstanding
    /// lock ticket becomes stale. An invalid level is rejected and the
    /// current one stays active.
    pub fn load_level(&mut self, level: Level) -> Result<(), LevelError> {
        let level = validated(level)?;
        self.store.initialize(&level);
        self.history.clear();
        self.selection = Selection::Idle;
        self.lock.invalidate();
        self.hints.reset(level.solution_steps.len());
        self.level = level;
        log::info!("loaded level {} ({})", self.level.id, self.level.title);
        self.evaluate();
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[must_use]
    pub fn store(&self) -> &ContainerStateStore {
        &self.store
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current amount in a container.
    pub fn amount(&self, id: &ContainerId) -> Result<Millilitres, StoreError> {
        self.store.get(id)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_engaged()
    }

    /// Solved status as of the last evaluation.
    ///
    /// Not refreshed while the pour-lock is engaged.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    // === Input ===

    /// Feed one click to the selection state machine.
    ///
    /// Panics if a clicked container is not part of the active level.
    pub fn dispatch(&mut self, event: InputEvent) -> ActionOutcome {
        if self.lock.is_engaged() {
            log::trace!("input dropped while pouring: {:?}", event);
            return ActionOutcome::Locked;
        }
        if let InputEvent::ContainerClicked(id) = &event {
            self.expect_known(id);
        }

        let transition = self.selection.on_event(&event, self.level.has_sink_and_tap);
        log::trace!("selection {:?} -> {:?}", self.selection, transition.next);
        self.selection = transition.next;

        match transition.action {
            Some(action) => self.commit(action),
            None => ActionOutcome::Selected,
        }
    }

    pub fn click_container(&mut self, id: impl Into<ContainerId>) -> ActionOutcome {
        self.dispatch(InputEvent::ContainerClicked(id.into()))
    }

    pub fn click_tap(&mut self) -> ActionOutcome {
        self.dispatch(InputEvent::ToolClicked(Tool::Tap))
    }

    pub fn click_sink(&mut self) -> ActionOutcome {
        self.dispatch(InputEvent::ToolClicked(Tool::Sink))
    }

    // === Direct actions ===

    /// Attempt an action without going through the selection.
    ///
    /// Obeys the pour-lock; leaves the selection as it is.
    pub fn perform(&mut self, action: Action) -> ActionOutcome {
        if self.lock.is_engaged() {
            return ActionOutcome::Locked;
        }
        self.commit(action)
    }

    pub fn transfer(&mut self, from: impl Into<ContainerId>, to: impl Into<ContainerId>) -> ActionOutcome {
        self.perform(Action::transfer(from, to))
    }

    pub fn fill_from_tap(&mut self, id: impl Into<ContainerId>) -> ActionOutcome {
        self.perform(Action::FillFromTap(id.into()))
    }

    pub fn empty_to_sink(&mut self, id: impl Into<ContainerId>) -> ActionOutcome {
        self.perform(Action::EmptyToSink(id.into()))
    }

    fn expect_known(&self, id: &ContainerId) {
        if !self.store.contains(id) {
            panic!(
                "container `{}` is not part of level {} ({})",
                id, self.level.id, self.level.title
            );
        }
    }

    fn commit(&mut self, action: Action) -> ActionOutcome {
        let planned = match rules::plan(&self.store, &action, self.level.has_sink_and_tap) {
            Ok(planned) => planned,
            Err(err) => panic!("cannot plan `{}` on level {}: {}", action, self.level.id, err),
        };
        let Some(planned) = planned else {
            log::trace!("no-op: {}", action);
            return ActionOutcome::NoOp(action);
        };

        self.history.push(self.store.snapshot());
        for (id, amount) in &planned.writes {
            if let Err(err) = self.store.set(id, *amount) {
                panic!("planned write for `{}` rejected: {}", action, err);
            }
        }
        let ticket = self.lock.engage(self.config.pour_lock);
        log::debug!("committed {} ({} ml), history {}", action, planned.volume, self.history.len());

        ActionOutcome::Committed(Commit {
            kind: action.kind(),
            action,
            volume: planned.volume,
            ticket,
        })
    }

    // === Lock ===

    /// Release the pour-lock and re-evaluate the win condition.
    ///
    /// Stale tickets (from before a load or reset, or already used) are
    /// ignored.
    pub fn release_lock(&mut self, ticket: LockTicket) -> LockRelease {
        if !self.lock.release(ticket) {
            log::debug!("ignoring stale lock ticket (generation {})", ticket.generation());
            return LockRelease::Stale;
        }
        let solved = self.evaluate();
        LockRelease::Released { solved }
    }

    fn evaluate(&mut self) -> bool {
        let solved = rules::is_solved(&self.store, &self.level.targets);
        if solved && !self.solved {
            log::info!("level {} ({}) solved", self.level.id, self.level.title);
        }
        self.solved = solved;
        solved
    }

    // === History ===

    /// Restore the board to before the last committed action.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.lock.is_engaged() {
            return UndoOutcome::Locked;
        }
        let Some(snapshot) = self.history.pop() else {
            return UndoOutcome::Empty;
        };

        self.store.restore(snapshot);
        self.selection = Selection::Idle;
        log::debug!("undo, history {}", self.history.len());
        self.evaluate();
        UndoOutcome::Restored
    }

    /// Start the level over: initial amounts, no history, no hints.
    pub fn reset(&mut self) -> ResetOutcome {
        if self.lock.is_engaged() {
            return ResetOutcome::Locked;
        }

        self.store.reset_to_initial();
        self.history.clear();
        self.selection = Selection::Idle;
        self.lock.invalidate();
        self.hints.reset(self.level.solution_steps.len());
        log::debug!("reset level {}", self.level.id);
        self.evaluate();
        ResetOutcome::Reset
    }

    // === Hints ===

    #[must_use]
    pub fn hints(&self) -> &HintRevealController {
        &self.hints
    }

    /// Reveal the first hint if none is visible (hint panel opened).
    pub fn request_first_reveal(&mut self) {
        self.hints.request_first_reveal();
    }

    /// Reveal one more hint. Returns false if all were visible.
    pub fn reveal_next(&mut self) -> bool {
        self.hints.reveal_next()
    }

    /// Steps the player can currently see.
    #[must_use]
    pub fn revealed_steps(&self) -> &[SolutionStep] {
        &self.level.solution_steps[..self.hints.revealed_count()]
    }
}
