//! Axis-aligned outline segments
//!
//! Vertical segments run top to bottom and horizontal segments run left to
//! right, so `start` is always the smaller coordinate along the segment.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::approx_eq;
use crate::grid::Cell;

/// A straight edge between two pixel-space points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Left side of a tile (top to bottom)
    pub fn left(cell: Cell, tile_size: f32) -> Self {
        let x = cell.col as f32 * tile_size;
        Self::new(
            Vec2::new(x, cell.row as f32 * tile_size),
            Vec2::new(x, (cell.row + 1) as f32 * tile_size),
        )
    }

    /// Right side of a tile (top to bottom)
    pub fn right(cell: Cell, tile_size: f32) -> Self {
        let x = (cell.col + 1) as f32 * tile_size;
        Self::new(
            Vec2::new(x, cell.row as f32 * tile_size),
            Vec2::new(x, (cell.row + 1) as f32 * tile_size),
        )
    }

    /// Top side of a tile (left to right)
    pub fn top(cell: Cell, tile_size: f32) -> Self {
        let y = cell.row as f32 * tile_size;
        Self::new(
            Vec2::new(cell.col as f32 * tile_size, y),
            Vec2::new((cell.col + 1) as f32 * tile_size, y),
        )
    }

    /// Bottom side of a tile (left to right)
    pub fn bottom(cell: Cell, tile_size: f32) -> Self {
        let y = (cell.row + 1) as f32 * tile_size;
        Self::new(
            Vec2::new(cell.col as f32 * tile_size, y),
            Vec2::new((cell.col + 1) as f32 * tile_size, y),
        )
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        approx_eq(self.start.y, self.end.y)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        approx_eq(self.start.x, self.end.x)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Collinear and touching end-to-start in either order
    pub fn can_merge(&self, other: &Segment) -> bool {
        if self.is_horizontal() && other.is_horizontal() && approx_eq(self.start.y, other.start.y) {
            return approx_eq(self.end.x, other.start.x) || approx_eq(self.start.x, other.end.x);
        }

        if self.is_vertical() && other.is_vertical() && approx_eq(self.start.x, other.start.x) {
            return approx_eq(self.end.y, other.start.y) || approx_eq(self.start.y, other.end.y);
        }

        false
    }

    /// Segment spanning the union of two mergeable segments
    pub fn merge(&self, other: &Segment) -> Segment {
        if self.is_horizontal() {
            Segment::new(
                Vec2::new(self.start.x.min(other.start.x), self.start.y),
                Vec2::new(self.end.x.max(other.end.x), self.end.y),
            )
        } else {
            Segment::new(
                Vec2::new(self.start.x, self.start.y.min(other.start.y)),
                Vec2::new(self.end.x, self.end.y.max(other.end.y)),
            )
        }
    }
}
