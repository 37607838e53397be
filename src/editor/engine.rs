//! The layout editor state machine
//!
//! [`LayoutEditor`] owns the live placed-object collection, the fixture
//! catalog, and the transient selection. Every editing command is a total
//! function over that state: guard failures (no selection, unknown id,
//! unknown fixture key) are no-ops rather than errors, matching the
//! lenient behavior of the canvas UI this models. Once a guard passes the
//! local mutation cannot fail partway.
//!
//! The editor never talks to the network. Callers commit the local
//! transition first and dispatch any best-effort sync afterwards (see
//! `crate::sync`), so a persistence failure can never roll back editing
//! state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{CatalogError, FixtureCatalog, FixtureDefinition};
use super::grid::Grid;
use super::object::{ObjectId, PlacedObject, SCALE_STEP};

/// Default drop position for newly added objects.
const DEFAULT_DROP: (i32, i32) = (400, 300);

/// A named, timestamped snapshot of the full object collection.
///
/// Snapshots hold values, not references: they stay valid independent of
/// later catalog edits. Loading one replaces the live collection verbatim,
/// without re-validation against the current catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub name: String,
    pub objects: Vec<PlacedObject>,
    pub timestamp: DateTime<Utc>,
}

/// The layout editor state machine.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    grid: Grid,
    catalog: FixtureCatalog,
    objects: Vec<PlacedObject>,
    selected: Option<ObjectId>,
    next_seq: u64,
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new(Grid::default(), FixtureCatalog::builtin())
    }
}

impl LayoutEditor {
    pub fn new(grid: Grid, catalog: FixtureCatalog) -> Self {
        Self {
            grid,
            catalog,
            objects: Vec::new(),
            selected: None,
            next_seq: 1,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn catalog(&self) -> &FixtureCatalog {
        &self.catalog
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn get(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    pub fn selected_id(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&PlacedObject> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    fn get_mut(&mut self, id: &ObjectId) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| &o.id == id)
    }

    fn selected_mut(&mut self) -> Option<&mut PlacedObject> {
        let id = self.selected.clone()?;
        self.get_mut(&id)
    }

    /// Add a new object of the given fixture type at the default drop
    /// position (scale 1, rotation 0) and select it.
    ///
    /// Display names number objects per type: the second rack added is
    /// "Clothing Rack 2". Unknown keys are a silent no-op; the palette is
    /// expected to only offer keys that exist.
    pub fn add_object(&mut self, type_key: &str) -> Option<&PlacedObject> {
        let label = self.catalog.get(type_key)?.label.clone();
        let count = self
            .objects
            .iter()
            .filter(|o| o.type_key == type_key)
            .count();

        let id = ObjectId(format!("{}-{}", type_key, self.next_seq));
        self.next_seq += 1;

        let object = PlacedObject::new(
            id.clone(),
            format!("{} {}", label, count + 1),
            type_key.to_string(),
            DEFAULT_DROP.0,
            DEFAULT_DROP.1,
        );
        self.objects.push(object);
        self.selected = Some(id);
        self.objects.last()
    }

    /// Move an object to a raw canvas position, snapping each axis to the
    /// grid. Returns the snapped position so the caller can mirror it to
    /// the persistence service after the commit.
    pub fn move_object(&mut self, id: &ObjectId, raw_x: f64, raw_y: f64) -> Option<(i32, i32)> {
        let (x, y) = self.grid.snap_point(raw_x, raw_y);
        let obj = self.get_mut(id)?;
        obj.x = x;
        obj.y = y;
        Some((x, y))
    }

    /// Grow the selected object by one scale step, clamped at the maximum.
    pub fn enlarge_selected(&mut self) -> bool {
        self.scale_selected(SCALE_STEP)
    }

    /// Shrink the selected object by one scale step, clamped at the minimum.
    pub fn shrink_selected(&mut self) -> bool {
        self.scale_selected(-SCALE_STEP)
    }

    fn scale_selected(&mut self, delta: f64) -> bool {
        match self.selected_mut() {
            Some(obj) => {
                obj.apply_scale_delta(delta);
                true
            }
            None => false,
        }
    }

    /// Rotate the selected object a quarter turn clockwise.
    pub fn rotate_selected(&mut self) -> bool {
        match self.selected_mut() {
            Some(obj) => {
                obj.rotate_quarter_turn();
                true
            }
            None => false,
        }
    }

    /// Rename the selected object. Empty names are rejected as a no-op.
    pub fn rename_selected(&mut self, new_name: &str) -> bool {
        if new_name.is_empty() {
            return false;
        }
        match self.selected_mut() {
            Some(obj) => {
                obj.display_name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove the selected object and clear the selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        self.objects.retain(|o| o.id != id);
        true
    }

    /// Set the selection to a live object id, or clear it with `None`.
    /// Ids that do not reference a live object leave the selection as is.
    pub fn select(&mut self, id: Option<ObjectId>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) if self.get(&id).is_some() => {
                self.selected = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    /// Register a new fixture type in the catalog.
    pub fn register_fixture(&mut self, def: FixtureDefinition) -> Result<(), CatalogError> {
        self.catalog.register(def)
    }

    /// Remove a fixture type and cascade-delete every placed object of
    /// that type in the same transition.
    ///
    /// `confirmed` is the caller's destructive-action acknowledgement;
    /// without it nothing happens. Returns the number of placed objects
    /// removed by the cascade.
    pub fn remove_fixture(&mut self, key: &str, confirmed: bool) -> Result<usize, CatalogError> {
        if !confirmed {
            return Ok(0);
        }
        self.catalog.remove(key)?;

        let before = self.objects.len();
        self.objects.retain(|o| o.type_key != key);
        if let Some(sel) = &self.selected {
            if !self.objects.iter().any(|o| &o.id == sel) {
                self.selected = None;
            }
        }
        Ok(before - self.objects.len())
    }

    /// Snapshot the full current collection under a name.
    ///
    /// Returns `None` for an empty name (validation rejection, no state
    /// change). The snapshot is a deep copy decoupled from live state.
    pub fn snapshot(&self, name: &str) -> Option<LayoutSnapshot> {
        if name.is_empty() {
            return None;
        }
        Some(LayoutSnapshot {
            name: name.to_string(),
            objects: self.objects.clone(),
            timestamp: Utc::now(),
        })
    }

    /// Replace the entire live collection with a snapshot's objects and
    /// clear the selection.
    ///
    /// Objects are taken verbatim, without re-validation against the
    /// current catalog: one referencing a since-removed fixture type will
    /// silently not render, which is accepted rather than an error.
    pub fn load_snapshot(&mut self, snapshot: &LayoutSnapshot) {
        self.objects = snapshot.objects.clone();
        self.selected = None;
        // Keep generated ids unique relative to anything just loaded.
        let max_seq = self
            .objects
            .iter()
            .filter_map(|o| o.id.as_str().rsplit('-').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_seq = self.next_seq.max(max_seq + 1);
    }
}
