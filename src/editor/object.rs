//! Placed fixture instances on the layout canvas

use serde::{Deserialize, Serialize};

/// Scale bounds for a placed object.
pub const MIN_SCALE: f64 = 0.5;
pub const MAX_SCALE: f64 = 3.0;

/// Scale change applied by one enlarge/shrink step.
pub const SCALE_STEP: f64 = 0.25;

/// Opaque identifier of a placed object, stable for the object's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One fixture instance positioned on the layout canvas.
///
/// Positions are grid-snapped integer canvas coordinates; every position
/// mutation goes through [`Grid::snap`](super::Grid::snap) so `x` and `y`
/// stay multiples of the grid unit. Scale and rotation are clamped rather
/// than rejected when a command would push them out of range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: ObjectId,
    /// Human label, mutable via rename.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Key into the fixture catalog. May dangle after the fixture type is
    /// removed from a loaded snapshot; such objects are skipped at render
    /// time instead of treated as an error.
    #[serde(rename = "type")]
    pub type_key: String,
    pub x: i32,
    pub y: i32,
    pub scale: f64,
    #[serde(rename = "rotation")]
    pub rotation_degrees: u16,
}

impl PlacedObject {
    /// Create a freshly added object at the default drop position.
    pub fn new(id: ObjectId, display_name: String, type_key: String, x: i32, y: i32) -> Self {
        Self {
            id,
            display_name,
            type_key,
            x,
            y,
            scale: 1.0,
            rotation_degrees: 0,
        }
    }

    /// Apply a scale delta, clamping to `[MIN_SCALE, MAX_SCALE]`.
    pub fn apply_scale_delta(&mut self, delta: f64) {
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Advance rotation by a quarter turn clockwise.
    pub fn rotate_quarter_turn(&mut self) {
        self.rotation_degrees = (self.rotation_degrees + 90) % 360;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlacedObject {
        PlacedObject::new(
            ObjectId::from("rack-1"),
            "Clothing Rack 1".to_string(),
            "rack".to_string(),
            400,
            300,
        )
    }

    #[test]
    fn test_new_object_defaults() {
        let obj = sample();
        assert_eq!(obj.scale, 1.0);
        assert_eq!(obj.rotation_degrees, 0);
    }

    #[test]
    fn test_scale_clamps_high() {
        let mut obj = sample();
        for _ in 0..10 {
            obj.apply_scale_delta(SCALE_STEP);
        }
        assert_eq!(obj.scale, MAX_SCALE);
    }

    #[test]
    fn test_scale_clamps_low() {
        let mut obj = sample();
        for _ in 0..10 {
            obj.apply_scale_delta(-SCALE_STEP);
        }
        assert_eq!(obj.scale, MIN_SCALE);
    }

    #[test]
    fn test_rotation_cycles_back_to_zero() {
        let mut obj = sample();
        let mut seen = vec![];
        for _ in 0..4 {
            obj.rotate_quarter_turn();
            seen.push(obj.rotation_degrees);
        }
        assert_eq!(seen, vec![90, 180, 270, 0]);
    }

    #[test]
    fn test_wire_field_names() {
        let obj = sample();
        let json = serde_json::to_value(&obj).unwrap();
        assert_eq!(json["name"], "Clothing Rack 1");
        assert_eq!(json["type"], "rack");
        assert_eq!(json["rotation"], 0);
    }
}
