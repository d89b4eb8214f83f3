//! Puzzle engine integration tests.
//!
//! These drive the engine the way a presentation layer would: clicks in,
//! commits and lock tickets out, tickets presented back after the
//! cool-down.

use liquid_puzzle::core::{ActionKind, ContainerId, Millilitres};
use liquid_puzzle::engine::{
    ActionOutcome, InputEvent, LockRelease, PuzzleEngine, ResetOutcome, Selection, Tool,
    UndoOutcome,
};
use liquid_puzzle::level::{ContainerDef, Level, LevelCatalog, TargetState};

fn two_jugs() -> Level {
    Level::new(1, "Simple arithmetic")
        .with_container(ContainerDef::new("c1", "Big jug", 500).full())
        .with_container(ContainerDef::new("c2", "Small jug", 300))
        .with_target(TargetState::container("c1", 200))
}

fn tap_and_sink() -> Level {
    Level::new(2, "Tap and sink")
        .with_sink_and_tap()
        .with_container(ContainerDef::new("c1", "Jar", 500))
        .with_container(ContainerDef::new("c2", "Glass", 300))
        .with_target(TargetState::any(400))
}

fn amounts(engine: &PuzzleEngine) -> Vec<Millilitres> {
    engine.store().amounts().collect()
}

/// Present the commit's ticket back, as the host does after the cool-down.
fn settle(engine: &mut PuzzleEngine, outcome: ActionOutcome) -> LockRelease {
    match outcome {
        ActionOutcome::Committed(commit) => engine.release_lock(commit.ticket),
        other => panic!("expected a commit, got {:?}", other),
    }
}

// =============================================================================
// Scenarios
// =============================================================================

/// Pour the big jug into the small one and measure 200 ml.
#[test]
fn test_simple_pour_solves() {
    let mut engine = PuzzleEngine::with_default_config(two_jugs()).unwrap();

    engine.click_container("c1");
    let outcome = engine.click_container("c2");

    assert_eq!(amounts(&engine), vec![200, 300]);
    assert_eq!(settle(&mut engine, outcome), LockRelease::Released { solved: true });
    assert!(engine.is_solved());
}

/// Measure 400 ml with a 500 ml jar, a 300 ml glass, a tap and a sink.
#[test]
fn test_tap_and_sink_sequence() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();

    let script: [(&[InputEvent], [Millilitres; 2]); 6] = [
        (&[InputEvent::ToolClicked(Tool::Tap), InputEvent::ContainerClicked(ContainerId::new("c1"))], [500, 0]),
        (&[InputEvent::ContainerClicked(ContainerId::new("c1")), InputEvent::ContainerClicked(ContainerId::new("c2"))], [200, 300]),
        (&[InputEvent::ContainerClicked(ContainerId::new("c2")), InputEvent::ToolClicked(Tool::Sink)], [200, 0]),
        (&[InputEvent::ContainerClicked(ContainerId::new("c1")), InputEvent::ContainerClicked(ContainerId::new("c2"))], [0, 200]),
        (&[InputEvent::ToolClicked(Tool::Tap), InputEvent::ContainerClicked(ContainerId::new("c1"))], [500, 200]),
        (&[InputEvent::ContainerClicked(ContainerId::new("c1")), InputEvent::ContainerClicked(ContainerId::new("c2"))], [400, 300]),
    ];

    let mut last = None;
    for (events, expected) in script {
        let mut outcome = ActionOutcome::Selected;
        for event in events {
            outcome = engine.dispatch(event.clone());
        }
        assert_eq!(amounts(&engine), expected.to_vec());
        last = Some(settle(&mut engine, outcome));
    }

    assert_eq!(last, Some(LockRelease::Released { solved: true }));
    assert_eq!(engine.history_len(), 6);
}

/// Pouring into a full container changes nothing and records nothing.
#[test]
fn test_transfer_into_full_is_noop() {
    let level = Level::new(3, "Full")
        .with_container(ContainerDef::new("c1", "A", 500).with_initial(100))
        .with_container(ContainerDef::new("c2", "B", 300).full())
        .with_target(TargetState::any(50));
    let mut engine = PuzzleEngine::with_default_config(level).unwrap();

    engine.click_container("c1");
    let outcome = engine.click_container("c2");

    assert!(matches!(outcome, ActionOutcome::NoOp(_)));
    assert_eq!(amounts(&engine), vec![100, 300]);
    assert!(!engine.can_undo());
    assert_eq!(engine.selection(), &Selection::Idle);
    assert!(!engine.is_locked());
}

/// Three commits and two undos leave the state after the first commit.
#[test]
fn test_undo_twice_after_three_commits() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();

    let outcome = engine.fill_from_tap("c1");
    settle(&mut engine, outcome);
    let after_first = amounts(&engine);

    let outcome = engine.transfer("c1", "c2");
    settle(&mut engine, outcome);
    let outcome = engine.empty_to_sink("c2");
    settle(&mut engine, outcome);

    assert_eq!(engine.undo(), UndoOutcome::Restored);
    assert_eq!(engine.undo(), UndoOutcome::Restored);
    assert_eq!(amounts(&engine), after_first);
    assert_eq!(engine.history_len(), 1);
}

/// Reset after arbitrary play restores the initial board.
#[test]
fn test_reset_after_play() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();

    let outcome = engine.fill_from_tap("c2");
    settle(&mut engine, outcome);
    let outcome = engine.transfer("c2", "c1");
    settle(&mut engine, outcome);
    let outcome = engine.fill_from_tap("c2");
    settle(&mut engine, outcome);
    assert_eq!(amounts(&engine), vec![300, 300]);

    assert_eq!(engine.reset(), ResetOutcome::Reset);
    assert_eq!(amounts(&engine), vec![0, 0]);
    assert!(engine.store().is_initial());
    assert!(!engine.can_undo());
}

// =============================================================================
// Pour-lock
// =============================================================================

/// Everything but hints waits for the lock.
#[test]
fn test_lock_blocks_input_undo_reset() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();
    let outcome = engine.fill_from_tap("c1");

    assert_eq!(engine.click_container("c2"), ActionOutcome::Locked);
    assert_eq!(engine.click_sink(), ActionOutcome::Locked);
    assert_eq!(engine.empty_to_sink("c1"), ActionOutcome::Locked);
    assert_eq!(engine.undo(), UndoOutcome::Locked);
    assert_eq!(engine.reset(), ResetOutcome::Locked);
    assert_eq!(engine.selection(), &Selection::Idle);

    settle(&mut engine, outcome);
    assert_eq!(engine.undo(), UndoOutcome::Restored);
}

/// A ticket from before a reset cannot unlock the board.
#[test]
fn test_ticket_stale_after_reset() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();

    let first = engine.fill_from_tap("c1");
    let first_ticket = first.commit().unwrap().ticket;
    engine.release_lock(first_ticket);
    engine.reset();

    let second = engine.fill_from_tap("c2");
    assert!(second.is_committed());
    assert_eq!(engine.release_lock(first_ticket), LockRelease::Stale);
    assert!(engine.is_locked());

    assert_eq!(settle(&mut engine, second), LockRelease::Released { solved: false });
}

/// A ticket can be used once.
#[test]
fn test_ticket_single_use() {
    let mut engine = PuzzleEngine::with_default_config(two_jugs()).unwrap();
    let outcome = engine.transfer("c1", "c2");
    let ticket = outcome.commit().unwrap().ticket;

    assert!(matches!(engine.release_lock(ticket), LockRelease::Released { .. }));
    assert_eq!(engine.release_lock(ticket), LockRelease::Stale);
}

/// Win status is not refreshed until the lock is released.
#[test]
fn test_win_waits_for_release() {
    let mut engine = PuzzleEngine::with_default_config(two_jugs()).unwrap();
    let outcome = engine.transfer("c1", "c2");

    assert!(!engine.is_solved());
    assert!(!engine.view().solved);
    assert!(engine.view().targets[0].met);

    settle(&mut engine, outcome);
    assert!(engine.is_solved());
}

// =============================================================================
// Commit reporting
// =============================================================================

#[test]
fn test_commit_kinds_and_volumes() {
    let mut engine = PuzzleEngine::with_default_config(tap_and_sink()).unwrap();

    let tap = engine.fill_from_tap("c2");
    let commit = tap.commit().unwrap().clone();
    assert_eq!((commit.kind, commit.volume), (ActionKind::Tap, 300));
    engine.release_lock(commit.ticket);

    let pour = engine.transfer("c2", "c1");
    let commit = pour.commit().unwrap().clone();
    assert_eq!((commit.kind, commit.volume), (ActionKind::Transfer, 300));
    engine.release_lock(commit.ticket);

    let sink = engine.empty_to_sink("c1");
    let commit = sink.commit().unwrap().clone();
    assert_eq!((commit.kind, commit.volume), (ActionKind::Sink, 300));
}

// =============================================================================
// Level switching
// =============================================================================

#[test]
fn test_load_level_rebuilds_everything() {
    let mut engine = PuzzleEngine::with_default_config(two_jugs()).unwrap();
    engine.click_container("c1");
    engine.request_first_reveal();

    engine.load_level(tap_and_sink()).unwrap();

    assert_eq!(engine.level().id, 2);
    assert_eq!(amounts(&engine), vec![0, 0]);
    assert!(engine.selection().is_idle());
    assert!(!engine.can_undo());
    assert_eq!(engine.hints().revealed_count(), 0);
}

/// Built-in levels without tools replay from their hints to a win.
#[test]
fn test_transfer_levels_replay_from_hints() {
    let catalog = LevelCatalog::builtin();
    for level_id in [1, 3, 4, 6, 8, 9] {
        let level = catalog.get(catalog.position(level_id).unwrap()).unwrap().clone();
        let mut engine = PuzzleEngine::with_default_config(level.clone()).unwrap();

        for step in &level.solution_steps {
            let before = amounts(&engine);
            let after: Vec<Millilitres> = level.containers.iter().map(|c| step.amount_for(&c.id)).collect();

            let from = (0..before.len()).find(|&i| after[i] < before[i]).unwrap();
            let to = (0..before.len()).find(|&i| after[i] > before[i]).unwrap();
            let outcome = engine.transfer(level.containers[from].id.clone(), level.containers[to].id.clone());

            assert_eq!(amounts(&engine), after, "level {} step {:?}", level_id, step.description);
            settle(&mut engine, outcome);
        }
        assert!(engine.is_solved(), "level {} not solved", level_id);
    }
}
