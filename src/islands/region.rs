//! Breadth-first region finding
//!
//! A region (island) is the maximal 4-connected set of solid cells reachable
//! from a seed. Cells are marked visited when enqueued, so each cell enters the
//! frontier at most once and the result is in discovery order.

use std::collections::VecDeque;

use crate::grid::{Cell, DIRECTIONS, Grid};

/// Caller-owned visited flags for one scan, sized to the grid
#[derive(Debug, Clone)]
pub struct VisitedMask {
    rows: usize,
    cols: usize,
    flags: Vec<bool>,
}

impl VisitedMask {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            flags: vec![false; rows * cols],
        }
    }

    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        crate::grid::in_bounds(cell, self.rows, self.cols)
            .then(|| cell.row as usize * self.cols + cell.col as usize)
    }

    /// Whether a cell has been visited (out-of-bounds cells never are)
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.flags[i])
    }

    /// Mark a cell; returns true if it was not already marked
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        match self.index(cell) {
            Some(i) if !self.flags[i] => {
                self.flags[i] = true;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.flags.fill(false);
    }
}

/// Flood-fill the region containing `seed`
///
/// # Panics
/// If `seed` is out of bounds or not solid.
pub fn find_region(seed: Cell, grid: &Grid) -> Vec<Cell> {
    let mut visited = VisitedMask::for_grid(grid);
    find_region_with(seed, grid, &mut visited)
}

/// Flood-fill from `seed`, recording every discovered cell in `visited`
///
/// Cells already present in `visited` are treated as closed, which lets a
/// full-grid scan share one mask across all regions.
///
/// # Panics
/// If `seed` is out of bounds or not solid.
pub fn find_region_with(seed: Cell, grid: &Grid, visited: &mut VisitedMask) -> Vec<Cell> {
    assert!(
        grid.is_solid(seed),
        "region seed {seed:?} must be an in-bounds solid cell"
    );

    let mut region = Vec::new();
    let mut open = VecDeque::new();
    if visited.insert(seed) {
        open.push_back(seed);
    }

    while let Some(cell) = open.pop_front() {
        region.push(cell);

        for dir in DIRECTIONS {
            let adj = cell.offset(dir);
            if grid.is_solid(adj) && visited.insert(adj) {
                open.push_back(adj);
            }
        }
    }

    region
}

/// Partition every solid cell into regions, scanning seeds in row-major order
pub fn find_all_regions(grid: &Grid) -> Vec<Vec<Cell>> {
    let mut visited = VisitedMask::for_grid(grid);
    let mut regions = Vec::new();

    for cell in grid.cells() {
        if grid.is_solid(cell) && !visited.contains(cell) {
            let region = find_region_with(cell, grid, &mut visited);
            log::debug!(
                "Region {} seeded at ({}, {}): {} cells",
                regions.len(),
                cell.row,
                cell.col,
                region.len()
            );
            regions.push(region);
        }
    }

    regions
}
