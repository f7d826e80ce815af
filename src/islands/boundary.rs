//! Boundary cell classification

use crate::grid::{Cell, DIRECTIONS, Grid};

/// A cell is on the boundary if it sits on the grid's outer ring or touches an
/// in-bounds empty cell.
pub fn is_boundary(cell: Cell, grid: &Grid) -> bool {
    grid.is_extent(cell) || DIRECTIONS.iter().any(|&dir| grid.is_open(cell.offset(dir)))
}

/// Boundary cells of a region, in region order
pub fn boundary_of(region: &[Cell], grid: &Grid) -> Vec<Cell> {
    region
        .iter()
        .copied()
        .filter(|&cell| is_boundary(cell, grid))
        .collect()
}
