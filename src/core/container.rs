//! Container identity and runtime state.
//!
//! ## ContainerId
//!
//! Containers are keyed by a string id that is unique within a level
//! (`"c1"`, `"c2"`, ...). The literal `ANY` is reserved for the target
//! sentinel and never names a real container.
//!
//! ## Millilitres
//!
//! All volumes are whole millilitres. There is no fractional liquid.

use serde::{Deserialize, Serialize};

/// Liquid volume in whole millilitres.
pub type Millilitres = u32;

/// Reserved id used by targets to mean "some container".
pub const ANY_CONTAINER: &str = "ANY";

/// Container identifier, unique within a level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(pub String);

impl ContainerId {
    /// Create a new container ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this id collides with the `ANY` target sentinel.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.0 == ANY_CONTAINER
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Current amount held by one container.
///
/// Produced by the store in display order; the presentation layer reads
/// these, it never writes them back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerState {
    pub id: ContainerId,
    pub current_amount: Millilitres,
}

impl ContainerState {
    #[must_use]
    pub fn new(id: ContainerId, current_amount: Millilitres) -> Self {
        Self { id, current_amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id() {
        let id = ContainerId::new("c1");
        assert_eq!(id.as_str(), "c1");
        assert_eq!(format!("{}", id), "c1");
        assert_eq!(id, ContainerId::from("c1"));
        assert!(!id.is_reserved());
        assert!(ContainerId::from(ANY_CONTAINER).is_reserved());
    }

    #[test]
    fn test_container_id_serializes_as_string() {
        let id = ContainerId::new("jug");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"jug\"");

        let back: ContainerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_container_state_camel_case() {
        let state = ContainerState::new(ContainerId::new("c2"), 300);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"id":"c2","currentAmount":300}"#);
    }
}
