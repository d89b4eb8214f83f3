//! Ordered level catalog and player progression.
//!
//! The catalog is validated as a whole when built. `Progress` is a plain
//! value the host persists however it likes; `sanitize` repairs values
//! read back from storage against the current catalog.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builtin::builtin_levels;
use super::definition::Level;
use super::validation::LevelError;

/// Errors building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog has no levels")]
    Empty,

    #[error("level id {0} appears more than once")]
    DuplicateLevelId(u32),

    #[error("level at index {index} is invalid: {source}")]
    InvalidLevel {
        index: usize,
        #[source]
        source: LevelError,
    },
}

/// An ordered, validated list of levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Validate and wrap `levels`, keeping their order.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = FxHashSet::default();
        for (index, level) in levels.iter().enumerate() {
            level
                .validate()
                .map_err(|source| CatalogError::InvalidLevel { index, source })?;
            if !ids.insert(level.id) {
                return Err(CatalogError::DuplicateLevelId(level.id));
            }
        }

        log::debug!("catalog with {} levels", levels.len());
        Ok(Self { levels })
    }

    /// Parse a JSON array of levels.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// The levels that ship with the crate.
    ///
    /// ```
    /// use liquid_puzzle::level::LevelCatalog;
    ///
    /// let catalog = LevelCatalog::builtin();
    /// assert_eq!(catalog.len(), 9);
    /// assert_eq!(catalog.get(0).unwrap().title, "Simple arithmetic");
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        match Self::new(builtin_levels()) {
            Ok(catalog) => catalog,
            Err(err) => panic!("built-in level set is broken: {}", err),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// Index of the level with `level_id`.
    #[must_use]
    pub fn position(&self, level_id: u32) -> Option<usize> {
        self.levels.iter().position(|level| level.id == level_id)
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}

impl<'a> IntoIterator for &'a LevelCatalog {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Errors selecting a level.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("level index {index} is outside a catalog of {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("level index {index} is locked (furthest unlocked is {max_reached})")]
    Locked { index: usize, max_reached: usize },
}

/// Result of finishing the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Moved on to the level at this index.
    Advanced(usize),
    /// The last level was finished; `current_index` is unchanged.
    CatalogFinished,
}

/// Which level is active and how far the player has got.
///
/// ## Example
///
/// ```
/// use liquid_puzzle::level::{Completion, Progress};
///
/// let mut progress = Progress::new();
/// assert!(!progress.is_unlocked(1));
///
/// assert_eq!(progress.complete_current(3), Completion::Advanced(1));
/// assert!(progress.is_unlocked(1));
/// assert!(progress.select(0, 3).is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub current_index: usize,
    pub max_reached_index: usize,
}

impl Progress {
    /// Start at the first level with nothing else unlocked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.max_reached_index
    }

    /// Make `index` the current level.
    pub fn select(&mut self, index: usize, catalog_len: usize) -> Result<(), ProgressError> {
        if index >= catalog_len {
            return Err(ProgressError::OutOfRange { index, len: catalog_len });
        }
        if !self.is_unlocked(index) {
            return Err(ProgressError::Locked {
                index,
                max_reached: self.max_reached_index,
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Record that the current level was solved and move on.
    pub fn complete_current(&mut self, catalog_len: usize) -> Completion {
        let next = self.current_index + 1;
        if next >= catalog_len {
            log::info!("catalog finished at level index {}", self.current_index);
            return Completion::CatalogFinished;
        }
        self.current_index = next;
        self.max_reached_index = self.max_reached_index.max(next);
        Completion::Advanced(next)
    }

    /// Forget all progress.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Clamp values read from storage to `catalog_len` levels.
    ///
    /// The current level never ends up beyond the furthest unlocked one.
    pub fn sanitize(&mut self, catalog_len: usize) {
        let last = catalog_len.saturating_sub(1);
        let repaired = Self {
            max_reached_index: self.max_reached_index.min(last),
            current_index: self.current_index.min(self.max_reached_index).min(last),
        };
        if repaired != *self {
            log::warn!("repaired stored progress {:?} -> {:?}", self, repaired);
            *self = repaired;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{ContainerDef, TargetState};

    fn level(id: u32) -> Level {
        Level::new(id, format!("Level {}", id))
            .with_container(ContainerDef::new("c1", "Jug", 100).full())
            .with_target(TargetState::any(100))
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = LevelCatalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.position(7), Some(6));
        assert_eq!(catalog.position(42), None);
        assert!(catalog.get(9).is_none());
        assert_eq!(catalog.iter().count(), 9);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(LevelCatalog::new(vec![]), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_level_id_rejected() {
        let result = LevelCatalog::new(vec![level(1), level(2), level(1)]);
        assert!(matches!(result, Err(CatalogError::DuplicateLevelId(1))));
    }

    #[test]
    fn test_invalid_level_reports_index() {
        let broken = Level::new(3, "Broken").with_container(ContainerDef::new("c1", "Jug", 100));
        let result = LevelCatalog::new(vec![level(1), broken]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidLevel {
                index: 1,
                source: LevelError::NoTargets
            })
        ));
    }

    #[test]
    fn test_catalog_json_roundtrip() {
        let catalog = LevelCatalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed = LevelCatalog::from_json(&json).unwrap();
        assert_eq!(catalog, parsed);
    }

    #[test]
    fn test_catalog_from_bad_json() {
        assert!(matches!(LevelCatalog::from_json("{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_select() {
        let mut progress = Progress::new();
        assert_eq!(
            progress.select(5, 3),
            Err(ProgressError::OutOfRange { index: 5, len: 3 })
        );
        assert_eq!(
            progress.select(1, 3),
            Err(ProgressError::Locked { index: 1, max_reached: 0 })
        );
        assert_eq!(progress.select(0, 3), Ok(()));
    }

    #[test]
    fn test_complete_and_replay() {
        let mut progress = Progress::new();
        assert_eq!(progress.complete_current(3), Completion::Advanced(1));
        assert_eq!(progress.complete_current(3), Completion::Advanced(2));
        assert_eq!(progress.complete_current(3), Completion::CatalogFinished);
        assert_eq!(progress.current_index, 2);

        // Replaying an earlier level keeps the furthest unlock
        progress.select(0, 3).unwrap();
        assert_eq!(progress.complete_current(3), Completion::Advanced(1));
        assert_eq!(progress.max_reached_index, 2);
    }

    #[test]
    fn test_restart() {
        let mut progress = Progress {
            current_index: 2,
            max_reached_index: 4,
        };
        progress.restart();
        assert_eq!(progress, Progress::new());
    }

    #[test]
    fn test_sanitize() {
        let mut progress = Progress {
            current_index: 12,
            max_reached_index: 20,
        };
        progress.sanitize(9);
        assert_eq!(progress.max_reached_index, 8);
        assert_eq!(progress.current_index, 8);

        let mut ahead = Progress {
            current_index: 5,
            max_reached_index: 2,
        };
        ahead.sanitize(9);
        assert_eq!(ahead.current_index, 2);

        let mut fine = Progress {
            current_index: 1,
            max_reached_index: 3,
        };
        fine.sanitize(9);
        assert_eq!(fine, Progress { current_index: 1, max_reached_index: 3 });
    }

    #[test]
    fn test_progress_serialization() {
        let progress = Progress {
            current_index: 1,
            max_reached_index: 3,
        };
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"currentIndex":1,"maxReachedIndex":3}"#);
        let back: Progress = serde_json::from_str(&json).unwrap();
        assert_eq!(progress, back);
    }
}
