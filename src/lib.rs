//! Tile Islands - outline extraction for 2D tile levels
//!
//! Core modules:
//! - `grid`: Occupancy grid and cell primitives
//! - `islands`: Region finding, boundary classification, outline merging, circle queries
//! - `level`: Per-level cache of islands and JSON level loading
//! - `physics`: Platformer kinematics resolved against level outlines

pub mod error;
pub mod grid;
pub mod islands;
pub mod level;
pub mod physics;

pub use error::{Error, Result};
pub use grid::{Cell, DIRECTIONS, Grid};
pub use islands::{CircleQuery, ExtentPolicy, OutlineConfig, Segment};
pub use level::{Island, Level, LevelDesc};

/// Level configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play-field dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 960.0;
    pub const SCREEN_HEIGHT: f32 = 640.0;

    /// Tile edge length (pixels)
    pub const TILE_SIZE: f32 = 32.0;

    /// Default grid dimensions derived from the screen and tile size
    pub const ROW_COUNT: usize = (SCREEN_HEIGHT / TILE_SIZE) as usize;
    pub const COL_COUNT: usize = (SCREEN_WIDTH / TILE_SIZE) as usize;

    /// Screen-space gravity (+y points down)
    pub const GRAVITY: Vec2 = Vec2::new(0.0, 100.0);

    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Relative tolerance for float comparisons
    pub const EPSILON: f32 = 1.0e-6;
}

/// Tolerant float equality, scaled by operand magnitude
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= consts::EPSILON * 1.0f32.max(a.abs().max(b.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        assert_eq!(consts::ROW_COUNT, 20);
        assert_eq!(consts::COL_COUNT, 30);
    }

    #[test]
    fn test_approx_eq_absorbs_accumulated_error() {
        let mut sum = 0.0f32;
        for _ in 0..10 {
            sum += 0.1;
        }
        assert!(approx_eq(sum, 1.0));
        assert!(approx_eq(960.0, 960.0 + 1.0e-4));
        assert!(!approx_eq(32.0, 32.5));
    }
}
