//! Win evaluation.
//!
//! A level is solved when every target holds. Equality is exact: 399 ml
//! does not satisfy a 400 ml target.

use crate::core::{ContainerId, ContainerStateStore, Millilitres};
use crate::level::{Level, SolutionStep, TargetContainer, TargetState};

/// Anything that can report container amounts.
///
/// Implemented for the live store and for `StepBoard`, so the same
/// evaluation checks the board and validates worked solutions.
pub trait VolumeSource {
    /// Amount in a container, or `None` if the source does not know it.
    fn volume_of(&self, id: &ContainerId) -> Option<Millilitres>;

    /// Check if at least one container holds exactly `amount`.
    fn any_holds(&self, amount: Millilitres) -> bool;
}

impl VolumeSource for ContainerStateStore {
    fn volume_of(&self, id: &ContainerId) -> Option<Millilitres> {
        self.get(id).ok()
    }

    fn any_holds(&self, amount: Millilitres) -> bool {
        self.amounts().any(|a| a == amount)
    }
}

/// A solution step read against its level's containers.
///
/// Containers the step does not list hold 0 ml.
#[derive(Clone, Copy, Debug)]
pub struct StepBoard<'a> {
    level: &'a Level,
    step: &'a SolutionStep,
}

impl<'a> StepBoard<'a> {
    #[must_use]
    pub fn new(level: &'a Level, step: &'a SolutionStep) -> Self {
        Self { level, step }
    }
}

impl VolumeSource for StepBoard<'_> {
    fn volume_of(&self, id: &ContainerId) -> Option<Millilitres> {
        self.level.container(id).map(|_| self.step.amount_for(id))
    }

    fn any_holds(&self, amount: Millilitres) -> bool {
        self.level
            .containers
            .iter()
            .any(|def| self.step.amount_for(&def.id) == amount)
    }
}

/// Check a single target.
///
/// A target naming a container the source does not know is never met.
pub fn target_met<S: VolumeSource + ?Sized>(source: &S, target: &TargetState) -> bool {
    match &target.container_id {
        TargetContainer::Any => source.any_holds(target.amount),
        TargetContainer::Container(id) => source.volume_of(id) == Some(target.amount),
    }
}

/// Check if every target is met.
///
/// ```
/// use liquid_puzzle::core::ContainerStateStore;
/// use liquid_puzzle::level::{ContainerDef, Level, TargetState};
/// use liquid_puzzle::rules::is_solved;
///
/// let level = Level::new(1, "Already there")
///     .with_container(ContainerDef::new("c1", "Jug", 500).with_initial(200))
///     .with_target(TargetState::any(200));
/// let store = ContainerStateStore::new(&level).unwrap();
///
/// assert!(is_solved(&store, &level.targets));
/// ```
pub fn is_solved<S: VolumeSource + ?Sized>(source: &S, targets: &[TargetState]) -> bool {
    targets.iter().all(|target| target_met(source, target))
}

/// Per-target satisfaction, in target order. For goal displays.
pub fn target_status<'a, S: VolumeSource + ?Sized>(
    source: &'a S,
    targets: &'a [TargetState],
) -> impl Iterator<Item = (&'a TargetState, bool)> + 'a {
    targets.iter().map(move |target| (target, target_met(source, target)))
}
