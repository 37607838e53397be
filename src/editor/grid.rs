//! Grid snapping for the layout canvas
//!
//! All placed-object positions live on a fixed pixel grid. Snapping rounds
//! each axis independently to the nearest multiple of the grid unit using
//! round-half-away-from-zero, so `snap(snap(v)) == snap(v)` and the result
//! is always an exact multiple of the unit.

/// Snap granularity and canvas extent for the layout editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    /// Pixel distance between grid lines; one unit represents 1m of floor.
    pub unit: i32,
    /// Canvas width in pixels.
    pub canvas_width: i32,
    /// Canvas height in pixels.
    pub canvas_height: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            unit: 40,
            canvas_width: 1000,
            canvas_height: 700,
        }
    }
}

impl Grid {
    pub fn new(unit: i32, canvas_width: i32, canvas_height: i32) -> Self {
        debug_assert!(unit > 0, "grid unit must be positive");
        Self {
            unit,
            canvas_width,
            canvas_height,
        }
    }

    /// Snap a raw coordinate to the nearest grid line.
    ///
    /// `f64::round` rounds half away from zero, which is the convention
    /// the canvas uses: 20.0 on a 40px grid snaps up to 40, -20.0 down
    /// to -40.
    pub fn snap(&self, value: f64) -> i32 {
        (value / self.unit as f64).round() as i32 * self.unit
    }

    /// Snap both axes of a raw point.
    pub fn snap_point(&self, x: f64, y: f64) -> (i32, i32) {
        (self.snap(x), self.snap(y))
    }

    /// Number of vertical grid lines across the canvas.
    pub fn columns(&self) -> i32 {
        self.canvas_width / self.unit
    }

    /// Number of horizontal grid lines down the canvas.
    pub fn rows(&self) -> i32 {
        self.canvas_height / self.unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_multiples_of_unit() {
        let grid = Grid::default();
        for raw in [-133.7, -20.0, 0.0, 1.0, 19.9, 20.0, 57.3, 412.0, 999.9] {
            let snapped = grid.snap(raw);
            assert_eq!(snapped % grid.unit, 0, "snap({}) = {}", raw, snapped);
        }
    }

    #[test]
    fn test_snap_idempotent() {
        let grid = Grid::default();
        for raw in [-81.2, 0.0, 39.9, 40.1, 260.0, 777.7] {
            let once = grid.snap(raw);
            assert_eq!(grid.snap(once as f64), once);
        }
    }

    #[test]
    fn test_snap_rounds_half_away_from_zero() {
        let grid = Grid::default();
        assert_eq!(grid.snap(20.0), 40);
        assert_eq!(grid.snap(19.999), 0);
        assert_eq!(grid.snap(-20.0), -40);
        assert_eq!(grid.snap(60.0), 80);
    }

    #[test]
    fn test_snap_point_independent_axes() {
        let grid = Grid::default();
        assert_eq!(grid.snap_point(412.0, 287.0), (400, 280));
    }

    #[test]
    fn test_grid_line_counts() {
        let grid = Grid::default();
        assert_eq!(grid.columns(), 25);
        assert_eq!(grid.rows(), 17);
    }
}
