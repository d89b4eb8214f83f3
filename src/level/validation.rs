//! Load-time validation of level data.
//!
//! Malformed levels are rejected outright rather than loaded and left
//! unsolvable. Validation has no side effects. A worked solution that does
//! not end in a solved state is harmless (hints only); it is reported by
//! `solution_reaches_targets`, and the engine logs it on load.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{ContainerId, Millilitres};
use crate::rules::{is_solved, StepBoard};

use super::definition::{Level, TargetContainer};

/// Why a level was rejected.
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("level data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level has no containers")]
    NoContainers,

    #[error("container id `{0}` appears more than once")]
    DuplicateContainer(ContainerId),

    #[error("container id `{0}` is reserved for targets")]
    ReservedContainerId(ContainerId),

    #[error("container `{0}` has zero capacity")]
    ZeroCapacity(ContainerId),

    #[error("container `{id}` starts with {initial} ml but holds only {capacity} ml")]
    InitialExceedsCapacity {
        id: ContainerId,
        initial: Millilitres,
        capacity: Millilitres,
    },

    #[error("level has no targets")]
    NoTargets,

    #[error("target references unknown container `{0}`")]
    UnknownTargetContainer(ContainerId),

    #[error("target of {amount} ml on `{target}` can never be reached (capacity {capacity} ml)")]
    UnreachableTarget {
        target: TargetContainer,
        amount: Millilitres,
        capacity: Millilitres,
    },

    #[error("solution step {step} references unknown container `{id}`")]
    UnknownStepContainer { step: usize, id: ContainerId },

    #[error("solution step {step} lists container `{id}` more than once")]
    DuplicateStepContainer { step: usize, id: ContainerId },

    #[error("solution step {step} puts {amount} ml into `{id}` (capacity {capacity} ml)")]
    StepExceedsCapacity {
        step: usize,
        id: ContainerId,
        amount: Millilitres,
        capacity: Millilitres,
    },
}

impl Level {
    /// Parse a level from the JSON catalog format and validate it.
    pub fn from_json(json: &str) -> Result<Level, LevelError> {
        let level: Level = serde_json::from_str(json)?;
        level.validate()?;
        Ok(level)
    }

    /// Check the level for data-integrity problems.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.containers.is_empty() {
            return Err(LevelError::NoContainers);
        }

        let mut capacities: FxHashMap<&ContainerId, Millilitres> = FxHashMap::default();
        for def in &self.containers {
            if def.id.is_reserved() {
                return Err(LevelError::ReservedContainerId(def.id.clone()));
            }
            if def.capacity == 0 {
                return Err(LevelError::ZeroCapacity(def.id.clone()));
            }
            if def.initial_amount > def.capacity {
                return Err(LevelError::InitialExceedsCapacity {
                    id: def.id.clone(),
                    initial: def.initial_amount,
                    capacity: def.capacity,
                });
            }
            if capacities.insert(&def.id, def.capacity).is_some() {
                return Err(LevelError::DuplicateContainer(def.id.clone()));
            }
        }

        if self.targets.is_empty() {
            return Err(LevelError::NoTargets);
        }

        for target in &self.targets {
            let capacity = match &target.container_id {
                TargetContainer::Any => self.max_capacity(),
                TargetContainer::Container(id) => *capacities
                    .get(id)
                    .ok_or_else(|| LevelError::UnknownTargetContainer(id.clone()))?,
            };
            if target.amount > capacity {
                return Err(LevelError::UnreachableTarget {
                    target: target.container_id.clone(),
                    amount: target.amount,
                    capacity,
                });
            }
        }

        for (step_index, step) in self.solution_steps.iter().enumerate() {
            let mut seen: Vec<&ContainerId> = Vec::with_capacity(step.amounts.len());
            for (id, amount) in step.amounts.iter() {
                let capacity = *capacities.get(id).ok_or_else(|| LevelError::UnknownStepContainer {
                    step: step_index,
                    id: id.clone(),
                })?;
                if seen.contains(&id) {
                    return Err(LevelError::DuplicateStepContainer {
                        step: step_index,
                        id: id.clone(),
                    });
                }
                seen.push(id);
                if amount > capacity {
                    return Err(LevelError::StepExceedsCapacity {
                        step: step_index,
                        id: id.clone(),
                        amount,
                        capacity,
                    });
                }
            }
        }

        Ok(())
    }

    /// Check if the worked solution ends in a solved state.
    ///
    /// A level without solution steps passes. A failing level is still
    /// playable; only its hints are wrong.
    #[must_use]
    pub fn solution_reaches_targets(&self) -> bool {
        self.solution_steps
            .last()
            .map_or(true, |last| is_solved(&StepBoard::new(self, last), &self.targets))
    }
}
