use std::f64::consts::PI;

/// Orbit radius in CSS pixels for the non-centered tiles.
pub const ORBIT_RADIUS: f64 = 140.0;

pub const CENTER_SCALE: f64 = 1.3;
pub const ORBIT_SCALE: f64 = 0.85;
pub const CENTER_OPACITY: f64 = 1.0;
pub const ORBIT_OPACITY: f64 = 0.7;
pub const CENTER_Z_INDEX: i32 = 30;
pub const ORBIT_Z_INDEX: i32 = 20;

/// Screen transform for one carousel tile, relative to the orbit center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconLayout {
    pub dx: f64,
    pub dy: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl IconLayout {
    fn centered() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            scale: CENTER_SCALE,
            opacity: CENTER_OPACITY,
            z_index: CENTER_Z_INDEX,
        }
    }
}

/// Computes the transform for the tile at `index` given the centered
/// `current_index` and total item count `n`. The centered tile sits at the
/// origin; the remaining `n - 1` tiles are distributed evenly on a circle of
/// [`ORBIT_RADIUS`], keyed by their rank among the non-centered indices in
/// original order. Deterministic and stateless; re-evaluated on every render.
pub fn icon_layout(index: usize, current_index: usize, n: usize) -> IconLayout {
    if index == current_index || n <= 1 {
        return IconLayout::centered();
    }
    let rank = if index < current_index {
        index
    } else {
        index - 1
    };
    let total = n - 1;
    let angle = 2.0 * PI * rank as f64 / total as f64;
    IconLayout {
        dx: ORBIT_RADIUS * angle.cos(),
        dy: ORBIT_RADIUS * angle.sin(),
        scale: ORBIT_SCALE,
        opacity: ORBIT_OPACITY,
        z_index: ORBIT_Z_INDEX,
    }
}
