//! Volume arithmetic for the three actions.
//!
//! Planning is pure: it reads the store and describes the writes an
//! action would make, or `None` when the action would change nothing.
//! Only the engine turns a plan into store mutations.

use smallvec::SmallVec;

use crate::core::{Action, ContainerId, ContainerStateStore, Millilitres, StoreError};

/// Volume a pour would move: limited by the source's content and the
/// destination's free space. Zero means nothing would happen.
///
/// ```
/// use liquid_puzzle::rules::transfer_volume;
///
/// assert_eq!(transfer_volume(500, 0, 300), 300);
/// assert_eq!(transfer_volume(200, 200, 300), 100);
/// assert_eq!(transfer_volume(0, 0, 300), 0);
/// assert_eq!(transfer_volume(100, 300, 300), 0);
/// ```
#[must_use]
pub fn transfer_volume(from_amount: Millilitres, to_amount: Millilitres, to_capacity: Millilitres) -> Millilitres {
    let available = to_capacity.saturating_sub(to_amount);
    if available == 0 || from_amount == 0 {
        return 0;
    }
    from_amount.min(available)
}

/// The writes one action would commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannedMove {
    /// New amounts, at most two (source and destination).
    pub writes: SmallVec<[(ContainerId, Millilitres); 2]>,

    /// Liquid moved, added by the tap, or drained by the sink.
    pub volume: Millilitres,
}

/// Plan an action against the current board.
///
/// Returns `Ok(None)` for every no-op: empty source, full destination,
/// self-transfer, tap on a full container, sink on an empty one, or a
/// tool action when the level has no tap and sink. Unknown ids are
/// reported as `StoreError::NotFound`.
pub fn plan(
    store: &ContainerStateStore,
    action: &Action,
    tools_available: bool,
) -> Result<Option<PlannedMove>, StoreError> {
    match action {
        Action::Transfer { from, to } => {
            let from_amount = store.get(from)?;
            let to_amount = store.get(to)?;
            let to_capacity = store.capacity(to)?;
            if from == to {
                return Ok(None);
            }

            let volume = transfer_volume(from_amount, to_amount, to_capacity);
            if volume == 0 {
                return Ok(None);
            }

            let mut writes = SmallVec::new();
            writes.push((from.clone(), from_amount - volume));
            writes.push((to.clone(), to_amount + volume));
            Ok(Some(PlannedMove { writes, volume }))
        }
        Action::FillFromTap(id) => {
            let amount = store.get(id)?;
            let capacity = store.capacity(id)?;
            if !tools_available || amount == capacity {
                return Ok(None);
            }

            let mut writes = SmallVec::new();
            writes.push((id.clone(), capacity));
            Ok(Some(PlannedMove {
                writes,
                volume: capacity - amount,
            }))
        }
        Action::EmptyToSink(id) => {
            let amount = store.get(id)?;
            if !tools_available || amount == 0 {
                return Ok(None);
            }

            let mut writes = SmallVec::new();
            writes.push((id.clone(), 0));
            Ok(Some(PlannedMove { writes, volume: amount }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{ContainerDef, Level, TargetState};

    fn store(c1: Millilitres, c2: Millilitres) -> ContainerStateStore {
        let level = Level::new(1, "Moves")
            .with_container(ContainerDef::new("c1", "Big", 500).with_initial(c1))
            .with_container(ContainerDef::new("c2", "Small", 300).with_initial(c2))
            .with_target(TargetState::any(400));
        ContainerStateStore::new(&level).unwrap()
    }

    fn id(raw: &str) -> ContainerId {
        ContainerId::new(raw)
    }

    #[test]
    fn test_transfer_volume_limits() {
        // Limited by destination space
        assert_eq!(transfer_volume(500, 0, 300), 300);
        // Limited by source content
        assert_eq!(transfer_volume(100, 0, 300), 100);
        // Exact fit
        assert_eq!(transfer_volume(300, 0, 300), 300);
        assert_eq!(transfer_volume(0, 100, 300), 0);
        assert_eq!(transfer_volume(50, 300, 300), 0);
    }

    #[test]
    fn test_plan_transfer() {
        let store = store(500, 0);
        let planned = plan(&store, &Action::transfer("c1", "c2"), false).unwrap().unwrap();

        assert_eq!(planned.volume, 300);
        assert_eq!(planned.writes.as_slice(), &[(id("c1"), 200), (id("c2"), 300)]);
    }

    #[test]
    fn test_plan_transfer_partial_space() {
        let store = store(500, 200);
        let planned = plan(&store, &Action::transfer("c1", "c2"), true).unwrap().unwrap();

        assert_eq!(planned.volume, 100);
        assert_eq!(planned.writes.as_slice(), &[(id("c1"), 400), (id("c2"), 300)]);
    }

    #[test]
    fn test_plan_transfer_noops() {
        assert_eq!(plan(&store(500, 300), &Action::transfer("c1", "c2"), true), Ok(None));
        assert_eq!(plan(&store(0, 100), &Action::transfer("c1", "c2"), true), Ok(None));
        assert_eq!(plan(&store(200, 100), &Action::transfer("c1", "c1"), true), Ok(None));
    }

    #[test]
    fn test_plan_tap() {
        let planned = plan(&store(100, 0), &Action::FillFromTap(id("c1")), true)
            .unwrap()
            .unwrap();
        assert_eq!(planned.volume, 400);
        assert_eq!(planned.writes.as_slice(), &[(id("c1"), 500)]);

        // Full already
        assert_eq!(plan(&store(500, 0), &Action::FillFromTap(id("c1")), true), Ok(None));
        // No tap on this level
        assert_eq!(plan(&store(100, 0), &Action::FillFromTap(id("c1")), false), Ok(None));
    }

    #[test]
    fn test_plan_sink() {
        let planned = plan(&store(100, 250), &Action::EmptyToSink(id("c2")), true)
            .unwrap()
            .unwrap();
        assert_eq!(planned.volume, 250);
        assert_eq!(planned.writes.as_slice(), &[(id("c2"), 0)]);

        assert_eq!(plan(&store(100, 0), &Action::EmptyToSink(id("c2")), true), Ok(None));
        assert_eq!(plan(&store(100, 250), &Action::EmptyToSink(id("c2")), false), Ok(None));
    }

    #[test]
    fn test_plan_unknown_container() {
        let store = store(100, 0);
        assert_eq!(
            plan(&store, &Action::transfer("c1", "nope"), true),
            Err(StoreError::NotFound(id("nope")))
        );
        assert!(plan(&store, &Action::FillFromTap(id("nope")), false).is_err());
    }
}
