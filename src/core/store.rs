//! Container state store: the live board.
//!
//! The store holds one amount per container of the active level and is
//! the single source of truth for what the board looks like now.
//!
//! ## Invariants
//!
//! - Every amount is within `0..=capacity` of its container.
//! - The set of ids is fixed when the store is built from a level.
//!
//! Amounts live in a persistent `im::Vector`, so a `Snapshot` is an O(1)
//! structural copy. Mutating the live store afterwards never changes a
//! snapshot that was already taken.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::container::{ContainerId, ContainerState, Millilitres};
use crate::level::{Level, LevelError};

/// Store contract violations.
///
/// Neither variant is user-triggerable; both indicate a bug in the
/// caller or the level data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("container `{0}` is not part of the active level")]
    NotFound(ContainerId),

    #[error("{amount} ml is out of range for container `{id}` (capacity {capacity} ml)")]
    OutOfRange {
        id: ContainerId,
        amount: Millilitres,
        capacity: Millilitres,
    },
}

/// Full, independent copy of every container amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    amounts: Vector<Millilitres>,
}

impl Snapshot {
    /// Amounts in display order.
    pub fn amounts(&self) -> impl Iterator<Item = Millilitres> + '_ {
        self.amounts.iter().copied()
    }

    /// Total liquid in the snapshot.
    #[must_use]
    pub fn total_volume(&self) -> u64 {
        self.amounts.iter().map(|&a| u64::from(a)).sum()
    }
}

/// Live amounts for the containers of one level.
#[derive(Clone, Debug)]
pub struct ContainerStateStore {
    /// Container ids in display order.
    ids: Vec<ContainerId>,

    /// Id to slot index.
    slots: FxHashMap<ContainerId, usize>,

    capacities: Vec<Millilitres>,

    initial: Vector<Millilitres>,

    amounts: Vector<Millilitres>,
}

impl ContainerStateStore {
    /// Validate `level` and build a store holding its initial amounts.
    pub fn new(level: &Level) -> Result<Self, LevelError> {
        level.validate()?;
        Ok(Self::from_valid(level))
    }

    /// Build a store for a level that has already passed validation.
    pub(crate) fn from_valid(level: &Level) -> Self {
        let ids: Vec<ContainerId> = level.containers.iter().map(|c| c.id.clone()).collect();
        let slots = ids
            .iter()
            .enumerate()
            .map(|(slot, id)| (id.clone(), slot))
            .collect();
        let capacities = level.containers.iter().map(|c| c.capacity).collect();
        let initial: Vector<Millilitres> = level.containers.iter().map(|c| c.initial_amount).collect();

        Self {
            ids,
            slots,
            capacities,
            amounts: initial.clone(),
            initial,
        }
    }

    /// Re-create the store for a validated `level`, discarding the
    /// current board.
    pub(crate) fn initialize(&mut self, level: &Level) {
        *self = Self::from_valid(level);
    }

    /// Put every container back to its initial amount.
    pub(crate) fn reset_to_initial(&mut self) {
        self.amounts = self.initial.clone();
    }

    /// Number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Check if a container id belongs to this store.
    #[must_use]
    pub fn contains(&self, id: &ContainerId) -> bool {
        self.slots.contains_key(id)
    }

    fn slot(&self, id: &ContainerId) -> Result<usize, StoreError> {
        self.slots
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Current amount in a container.
    pub fn get(&self, id: &ContainerId) -> Result<Millilitres, StoreError> {
        let slot = self.slot(id)?;
        Ok(self.amounts[slot])
    }

    /// Capacity of a container.
    pub fn capacity(&self, id: &ContainerId) -> Result<Millilitres, StoreError> {
        let slot = self.slot(id)?;
        Ok(self.capacities[slot])
    }

    /// Free space left in a container.
    pub fn free_space(&self, id: &ContainerId) -> Result<Millilitres, StoreError> {
        let slot = self.slot(id)?;
        Ok(self.capacities[slot].saturating_sub(self.amounts[slot]))
    }

    /// Set a container's amount.
    ///
    /// Rejects anything outside `0..=capacity`; the store is left unchanged.
    pub(crate) fn set(&mut self, id: &ContainerId, amount: Millilitres) -> Result<(), StoreError> {
        let slot = self.slot(id)?;
        let capacity = self.capacities[slot];
        if amount > capacity {
            return Err(StoreError::OutOfRange {
                id: id.clone(),
                amount,
                capacity,
            });
        }
        self.amounts.set(slot, amount);
        Ok(())
    }

    /// Take a full, independent copy of the board.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            amounts: self.amounts.clone(),
        }
    }

    /// Replace the board with a snapshot taken from this store.
    ///
    /// Panics if the snapshot belongs to a level with a different
    /// container count.
    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        assert_eq!(
            snapshot.amounts.len(),
            self.ids.len(),
            "Snapshot does not match the active level"
        );
        self.amounts = snapshot.amounts;
    }

    /// Container ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &ContainerId> {
        self.ids.iter()
    }

    /// Current amounts in display order.
    pub fn amounts(&self) -> impl Iterator<Item = Millilitres> + '_ {
        self.amounts.iter().copied()
    }

    /// Per-container state in display order.
    pub fn states(&self) -> impl Iterator<Item = ContainerState> + '_ {
        self.ids
            .iter()
            .zip(self.amounts.iter())
            .map(|(id, &amount)| ContainerState::new(id.clone(), amount))
    }

    /// Total liquid on the board.
    #[must_use]
    pub fn total_volume(&self) -> u64 {
        self.amounts.iter().map(|&a| u64::from(a)).sum()
    }

    /// Check if the board equals its initial state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.amounts == self.initial
    }
}
