//! Level data: definitions, validation, the built-in set, the catalog.
//!
//! A `Level` is pure data. It is validated once, when loaded into the
//! engine or a catalog, and never changes afterwards.

pub mod definition;
pub mod validation;
pub mod builtin;
pub mod catalog;

pub use definition::{ContainerDef, Level, SolutionStep, StepAmounts, TargetContainer, TargetState};
pub use validation::LevelError;
pub use builtin::builtin_levels;
pub use catalog::{CatalogError, Completion, LevelCatalog, Progress, ProgressError};
