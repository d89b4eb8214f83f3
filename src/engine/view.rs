//! Read-only presentation view of the engine.

use serde::{Deserialize, Serialize};

use crate::core::{ContainerId, Millilitres};
use crate::level::TargetContainer;
use crate::rules;

use super::engine::PuzzleEngine;
use super::selection::{Selection, Tool};

/// One container as the renderer needs it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerView {
    pub id: ContainerId,
    pub name: String,
    pub capacity: Millilitres,
    pub current_amount: Millilitres,
    pub sprite_url: Option<String>,
    pub selected: bool,

    /// The tap is selected and this container has room.
    pub fillable: bool,
}

/// One goal line with its live status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetView {
    pub container_id: TargetContainer,
    pub amount: Millilitres,
    pub met: bool,
}

/// Everything a presentation layer renders, in one serializable value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineView {
    pub level_id: u32,
    pub title: String,
    pub description: String,
    pub containers: Vec<ContainerView>,
    pub targets: Vec<TargetView>,
    pub selection: Selection,
    pub tools_available: bool,

    /// A selected container could take water from the tap.
    pub tap_suggested: bool,

    /// A selected container could be drained into the sink.
    pub sink_suggested: bool,

    pub can_undo: bool,
    pub locked: bool,
    pub solved: bool,
    pub revealed_hints: usize,
    pub total_hints: usize,
}

impl PuzzleEngine {
    /// Build the presentation view of the current state.
    #[must_use]
    pub fn view(&self) -> EngineView {
        let level = self.level();
        let store = self.store();
        let selection = self.selection();
        let tools = level.has_sink_and_tap;
        let tap_selected = selection.tool() == Some(Tool::Tap);

        // Store slots follow the level's container order.
        let containers: Vec<ContainerView> = level
            .containers
            .iter()
            .zip(store.amounts())
            .map(|(def, current_amount)| ContainerView {
                id: def.id.clone(),
                name: def.name.clone(),
                capacity: def.capacity,
                current_amount,
                sprite_url: def.sprite_url.clone(),
                selected: selection.container() == Some(&def.id),
                fillable: tap_selected && current_amount < def.capacity,
            })
            .collect();

        let selected = containers.iter().find(|c| c.selected);
        let tap_suggested = tools && selected.is_some_and(|c| c.current_amount < c.capacity);
        let sink_suggested = tools && selected.is_some_and(|c| c.current_amount > 0);

        let targets = rules::target_status(store, &level.targets)
            .map(|(target, met)| TargetView {
                container_id: target.container_id.clone(),
                amount: target.amount,
                met,
            })
            .collect();

        EngineView {
            level_id: level.id,
            title: level.title.clone(),
            description: level.description.clone(),
            containers,
            targets,
            selection: selection.clone(),
            tools_available: tools,
            tap_suggested,
            sink_suggested,
            can_undo: self.can_undo(),
            locked: self.is_locked(),
            solved: self.is_solved(),
            revealed_hints: self.hints().revealed_count(),
            total_hints: self.hints().total(),
        }
    }
}
