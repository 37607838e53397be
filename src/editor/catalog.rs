//! Fixture catalog: the runtime-mutable registry of placeable fixture kinds

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A definition with this key is already registered. Registration is
    /// rejected rather than overwritten so existing placed objects keep
    /// their visual meaning.
    #[error("duplicate fixture key: {key}")]
    Duplicate { key: String },

    /// Key or label was empty.
    #[error("fixture definition is missing a {field}")]
    MissingField { field: &'static str },

    /// No definition registered under this key.
    #[error("unknown fixture key: {key}")]
    Unknown { key: String },
}

/// A catalog entry describing a placeable fixture kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureDefinition {
    /// Unique catalog key, referenced by `PlacedObject::type_key`.
    pub key: String,
    /// Width in canvas pixels at scale 1.
    pub base_width: f64,
    /// Height in canvas pixels at scale 1.
    pub base_height: f64,
    /// Reference to a visual asset for palettes and thumbnails.
    pub thumbnail_ref: String,
    /// Display label, also the stem of generated object names.
    pub label: String,
    /// Real-world footprint shown next to the label, e.g. "1m x 2m".
    pub real_world_size: String,
}

impl FixtureDefinition {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        base_width: f64,
        base_height: f64,
    ) -> Self {
        Self {
            key: key.into(),
            base_width,
            base_height,
            thumbnail_ref: String::new(),
            label: label.into(),
            real_world_size: String::new(),
        }
    }

    pub fn with_thumbnail(mut self, thumbnail_ref: impl Into<String>) -> Self {
        self.thumbnail_ref = thumbnail_ref.into();
        self
    }

    pub fn with_real_world_size(mut self, size: impl Into<String>) -> Self {
        self.real_world_size = size.into();
        self
    }
}

/// Registry of fixture definitions, keyed by `FixtureDefinition::key`.
///
/// Seeded with the built-in store fixtures; extensible and shrinkable at
/// runtime. Process-local: the catalog is not persisted independently of
/// saved layouts.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    fixtures: HashMap<String, FixtureDefinition>,
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FixtureCatalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self {
            fixtures: HashMap::new(),
        }
    }

    /// The built-in fixture set every editor starts with.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        let defs = [
            FixtureDefinition::new("rack", "Clothing Rack", 40.0, 80.0)
                .with_real_world_size("1m x 2m"),
            FixtureDefinition::new("table", "Display Table", 80.0, 60.0)
                .with_real_world_size("2m x 1.5m"),
            FixtureDefinition::new("mannequin", "Mannequin", 20.0, 20.0)
                .with_real_world_size("0.5m x 0.5m"),
            FixtureDefinition::new("checkout", "Checkout Counter", 80.0, 40.0)
                .with_real_world_size("2m x 1m"),
            FixtureDefinition::new("chair", "Chair", 20.0, 20.0)
                .with_real_world_size("0.5m x 0.5m"),
            FixtureDefinition::new("fitting-room", "Fitting Room", 60.0, 60.0)
                .with_real_world_size("1.5m x 1.5m"),
        ];
        for def in defs {
            // Keys in the seed set are distinct.
            let _ = catalog.register(def);
        }
        catalog
    }

    /// Register a fixture definition.
    ///
    /// Rejects empty keys or labels and duplicate keys; on rejection the
    /// catalog is unchanged.
    pub fn register(&mut self, def: FixtureDefinition) -> Result<(), CatalogError> {
        if def.key.is_empty() {
            return Err(CatalogError::MissingField { field: "key" });
        }
        if def.label.is_empty() {
            return Err(CatalogError::MissingField { field: "label" });
        }
        if self.fixtures.contains_key(&def.key) {
            return Err(CatalogError::Duplicate { key: def.key });
        }
        self.fixtures.insert(def.key.clone(), def);
        Ok(())
    }

    /// Remove a fixture definition. The caller is responsible for
    /// cascading removal of placed objects of this type in the same
    /// transition (see [`LayoutEditor::remove_fixture`]).
    ///
    /// [`LayoutEditor::remove_fixture`]: super::LayoutEditor::remove_fixture
    pub fn remove(&mut self, key: &str) -> Result<FixtureDefinition, CatalogError> {
        self.fixtures
            .remove(key)
            .ok_or_else(|| CatalogError::Unknown {
                key: key.to_string(),
            })
    }

    pub fn get(&self, key: &str) -> Option<&FixtureDefinition> {
        self.fixtures.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fixtures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// All definitions in key order, for palette listings.
    pub fn sorted(&self) -> Vec<&FixtureDefinition> {
        let mut defs: Vec<_> = self.fixtures.values().collect();
        defs.sort_by(|a, b| a.key.cmp(&b.key));
        defs
    }
}
