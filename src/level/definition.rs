//! Level definition types.
//!
//! A `Level` is immutable puzzle data: which containers exist, how much
//! they hold at the start, which amounts win, and a worked solution used
//! for hints. The engine never mutates a level.
//!
//! Levels are built in code with the builder methods or read from the
//! JSON catalog format (camelCase keys, `"ANY"` as the target sentinel).

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use crate::core::{ContainerId, Millilitres, ANY_CONTAINER};

/// Immutable description of one container.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::level::ContainerDef;
///
/// let jug = ContainerDef::new("c1", "Big jug", 500).with_initial(500);
/// assert_eq!(jug.capacity, 500);
/// assert_eq!(jug.initial_amount, 500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDef {
    /// Unique key within the level.
    pub id: ContainerId,

    /// Display label. Irrelevant to the rules.
    pub name: String,

    /// Maximum volume (must be positive).
    pub capacity: Millilitres,

    /// Amount held when the level starts or is reset.
    pub initial_amount: Millilitres,

    /// Visual asset reference. Ignored by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_url: Option<String>,
}

impl ContainerDef {
    /// Create an empty container definition.
    pub fn new(id: impl Into<ContainerId>, name: impl Into<String>, capacity: Millilitres) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            initial_amount: 0,
            sprite_url: None,
        }
    }

    /// Set the starting amount.
    #[must_use]
    pub fn with_initial(mut self, amount: Millilitres) -> Self {
        self.initial_amount = amount;
        self
    }

    /// Start the container full.
    #[must_use]
    pub fn full(mut self) -> Self {
        self.initial_amount = self.capacity;
        self
    }

    /// Attach a sprite reference.
    #[must_use]
    pub fn with_sprite(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = Some(url.into());
        self
    }
}

/// Which container a target applies to.
///
/// Serialized as a plain string: a container id, or `"ANY"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TargetContainer {
    /// Satisfied by whichever container holds the amount.
    Any,
    /// Satisfied only by this container.
    Container(ContainerId),
}

impl From<String> for TargetContainer {
    fn from(raw: String) -> Self {
        if raw == ANY_CONTAINER {
            TargetContainer::Any
        } else {
            TargetContainer::Container(ContainerId(raw))
        }
    }
}

impl From<TargetContainer> for String {
    fn from(target: TargetContainer) -> Self {
        match target {
            TargetContainer::Any => ANY_CONTAINER.to_string(),
            TargetContainer::Container(id) => id.0,
        }
    }
}

impl fmt::Display for TargetContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetContainer::Any => f.write_str(ANY_CONTAINER),
            TargetContainer::Container(id) => write!(f, "{}", id),
        }
    }
}

/// A required exact amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetState {
    pub container_id: TargetContainer,
    pub amount: Millilitres,
}

impl TargetState {
    /// Target a specific container.
    pub fn container(id: impl Into<ContainerId>, amount: Millilitres) -> Self {
        Self {
            container_id: TargetContainer::Container(id.into()),
            amount,
        }
    }

    /// Target any container.
    #[must_use]
    pub fn any(amount: Millilitres) -> Self {
        Self {
            container_id: TargetContainer::Any,
            amount,
        }
    }
}

/// Expected amounts at one step of the worked solution.
///
/// Kept as an ordered list rather than a map so that a container named
/// twice in the source data survives deserialization and can be rejected
/// by validation instead of being silently overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepAmounts(SmallVec<[(ContainerId, Millilitres); 4]>);

impl StepAmounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Duplicates are kept.
    pub fn push(&mut self, id: impl Into<ContainerId>, amount: Millilitres) {
        self.0.push((id.into(), amount));
    }

    /// Amount recorded for a container, if any.
    #[must_use]
    pub fn get(&self, id: &ContainerId) -> Option<Millilitres> {
        self.0.iter().find(|(key, _)| key == id).map(|&(_, amount)| amount)
    }

    /// Iterate entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContainerId, Millilitres)> {
        self.0.iter().map(|(id, amount)| (id, *amount))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<I: Into<ContainerId>> FromIterator<(I, Millilitres)> for StepAmounts {
    fn from_iter<T: IntoIterator<Item = (I, Millilitres)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, amount)| (id.into(), amount)).collect())
    }
}

impl Serialize for StepAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, amount) in &self.0 {
            map.serialize_entry(id, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StepAmounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountsVisitor;

        impl<'de> Visitor<'de> for AmountsVisitor {
            type Value = StepAmounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of container id to amount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = SmallVec::new();
                while let Some((id, amount)) = access.next_entry::<ContainerId, Millilitres>()? {
                    entries.push((id, amount));
                }
                Ok(StepAmounts(entries))
            }
        }

        deserializer.deserialize_map(AmountsVisitor)
    }
}

/// One entry of the worked solution. Used for hints only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionStep {
    pub description: String,
    pub amounts: StepAmounts,
}

impl SolutionStep {
    pub fn new<I, K>(description: impl Into<String>, amounts: I) -> Self
    where
        I: IntoIterator<Item = (K, Millilitres)>,
        K: Into<ContainerId>,
    {
        Self {
            description: description.into(),
            amounts: amounts.into_iter().collect(),
        }
    }

    /// Amount shown for a container at this step. Missing entries show as 0.
    #[must_use]
    pub fn amount_for(&self, id: &ContainerId) -> Millilitres {
        self.amounts.get(id).unwrap_or(0)
    }
}

/// A complete puzzle.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::level::{ContainerDef, Level, TargetState};
///
/// let level = Level::new(1, "Simple arithmetic")
///     .with_container(ContainerDef::new("c1", "Big jug", 500).full())
///     .with_container(ContainerDef::new("c2", "Small jug", 300))
///     .with_target(TargetState::container("c1", 200));
///
/// assert!(level.validate().is_ok());
/// assert!(!level.has_sink_and_tap);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// When false, tap and sink actions are unavailable.
    #[serde(default)]
    pub has_sink_and_tap: bool,

    /// Containers in display order.
    pub containers: Vec<ContainerDef>,

    /// All of these must hold for the level to be solved.
    pub targets: Vec<TargetState>,

    #[serde(default)]
    pub solution_steps: Vec<SolutionStep>,
}

impl Level {
    /// Create an empty level. Add containers and targets before use.
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            has_sink_and_tap: false,
            containers: Vec::new(),
            targets: Vec::new(),
            solution_steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Enable the tap and the sink.
    #[must_use]
    pub fn with_sink_and_tap(mut self) -> Self {
        self.has_sink_and_tap = true;
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerDef) -> Self {
        self.containers.push(container);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: TargetState) -> Self {
        self.targets.push(target);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: SolutionStep) -> Self {
        self.solution_steps.push(step);
        self
    }

    /// Get a container definition by id.
    #[must_use]
    pub fn container(&self, id: &ContainerId) -> Option<&ContainerDef> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// Largest capacity among the containers (0 for an empty level).
    #[must_use]
    pub fn max_capacity(&self) -> Millilitres {
        self.containers.iter().map(|c| c.capacity).max().unwrap_or(0)
    }

    /// Total liquid present at the start.
    #[must_use]
    pub fn initial_volume(&self) -> u64 {
        self.containers.iter().map(|c| u64::from(c.initial_amount)).sum()
    }
}
