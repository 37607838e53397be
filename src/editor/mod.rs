//! Layout editor: placed objects, fixture catalog, and editing commands
//!
//! This module is the heart of floorset. State is three values: the
//! placed-object collection, the fixture catalog, and the transient
//! selection (at most one object, never persisted). Editing commands are
//! atomic transitions over those values; network mirroring happens after
//! the local commit, never inside it.

pub mod catalog;
pub mod engine;
pub mod grid;
pub mod object;

pub use catalog::{CatalogError, FixtureCatalog, FixtureDefinition};
pub use engine::{LayoutEditor, LayoutSnapshot};
pub use grid::Grid;
pub use object::{ObjectId, PlacedObject, MAX_SCALE, MIN_SCALE, SCALE_STEP};
