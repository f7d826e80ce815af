//! Occupancy grid and cell primitives
//!
//! Tile codes are `0` for empty and `> 0` for solid. Cells are addressed by
//! signed (row, col) so that neighbor offsets can step outside the grid and be
//! rejected by `in_bounds` instead of wrapping.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{COL_COUNT, ROW_COUNT};
use crate::error::{Error, Result};

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell offset by a direction
    #[inline]
    pub fn offset(self, dir: Cell) -> Cell {
        Cell::new(self.row + dir.row, self.col + dir.col)
    }

    #[inline]
    pub fn left(self) -> Cell {
        Cell::new(self.row, self.col - 1)
    }

    #[inline]
    pub fn right(self) -> Cell {
        Cell::new(self.row, self.col + 1)
    }

    #[inline]
    pub fn up(self) -> Cell {
        Cell::new(self.row - 1, self.col)
    }

    #[inline]
    pub fn down(self) -> Cell {
        Cell::new(self.row + 1, self.col)
    }
}

/// 4-neighbor offsets: up, down, left, right
pub const DIRECTIONS: [Cell; 4] = [
    Cell::new(-1, 0),
    Cell::new(1, 0),
    Cell::new(0, -1),
    Cell::new(0, 1),
];

/// Whether a cell lies inside a `rows x cols` grid
#[inline]
pub fn in_bounds(cell: Cell, rows: usize, cols: usize) -> bool {
    cell.row >= 0 && cell.col >= 0 && (cell.row as usize) < rows && (cell.col as usize) < cols
}

/// Whether a cell lies on the outer ring of a `rows x cols` grid
#[inline]
pub fn is_extent(cell: Cell, rows: usize, cols: usize) -> bool {
    let last_row = rows as i32 - 1;
    let last_col = cols as i32 - 1;
    cell.row == 0 || cell.col == 0 || cell.row == last_row || cell.col == last_col
}

/// Pixel rectangle (min, max) covered by a tile
pub fn tile_rect(cell: Cell, tile_size: f32) -> (Vec2, Vec2) {
    let min = Vec2::new(cell.col as f32 * tile_size, cell.row as f32 * tile_size);
    (min, min + Vec2::splat(tile_size))
}

/// Fixed-size rectangular array of tile codes (row-major)
///
/// Serialized as row literals so that deserialization goes through `from_rows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    tiles: Vec<u32>,
}

impl TryFrom<Vec<Vec<u32>>> for Grid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u32>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(ROW_COUNT, COL_COUNT)
    }
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![0; rows * cols],
        }
    }

    /// Build a grid from row literals (the way levels are authored)
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut tiles = Vec::with_capacity(rows.len() * expected);
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != expected {
                return Err(Error::RaggedRows {
                    row,
                    expected,
                    actual: codes.len(),
                });
            }
            tiles.extend_from_slice(codes);
        }

        Ok(Self {
            rows: rows.len(),
            cols: expected,
            tiles,
        })
    }

    /// Seeded random grid where each tile is solid with probability `density`
    pub fn scatter(rows: usize, cols: usize, density: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let density = density.clamp(0.0, 1.0);
        let tiles = (0..rows * cols)
            .map(|_| u32::from(rng.random::<f32>() < density))
            .collect();
        Self { rows, cols, tiles }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        in_bounds(cell, self.rows, self.cols)
    }

    #[inline]
    pub fn is_extent(&self, cell: Cell) -> bool {
        is_extent(cell, self.rows, self.cols)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.cols + cell.col as usize)
    }

    /// Tile code at a cell (None when out of bounds)
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.index(cell).map(|i| self.tiles[i])
    }

    /// Set a tile code; out-of-bounds writes are ignored
    pub fn set(&mut self, cell: Cell, code: u32) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = code;
        }
    }

    /// In bounds and occupied
    #[inline]
    pub fn is_solid(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(|code| code > 0)
    }

    /// In bounds and empty
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell) == Some(0)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32).flat_map(move |row| (0..self.cols as i32).map(move |col| Cell::new(row, col)))
    }

    /// Row literals, the inverse of `from_rows`
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.tiles.chunks(self.cols.max(1)).map(<[u32]>::to_vec).collect()
    }

    pub fn solid_count(&self) -> usize {
        self.tiles.iter().filter(|&&code| code > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(in_bounds(Cell::new(0, 0), 3, 4));
        assert!(in_bounds(Cell::new(2, 3), 3, 4));
        assert!(!in_bounds(Cell::new(3, 0), 3, 4));
        assert!(!in_bounds(Cell::new(0, 4), 3, 4));
        assert!(!in_bounds(Cell::new(-1, 0), 3, 4));
        assert!(!in_bounds(Cell::new(0, -1), 3, 4));
    }

    #[test]
    fn test_extent_ring() {
        assert!(is_extent(Cell::new(0, 2), 5, 5));
        assert!(is_extent(Cell::new(4, 2), 5, 5));
        assert!(is_extent(Cell::new(2, 0), 5, 5));
        assert!(is_extent(Cell::new(2, 4), 5, 5));
        assert!(!is_extent(Cell::new(2, 2), 5, 5));
        assert!(!is_extent(Cell::new(1, 3), 5, 5));
    }

    #[test]
    fn test_directions_are_unit_offsets() {
        for dir in DIRECTIONS {
            assert_eq!(dir.row.abs() + dir.col.abs(), 1);
        }
        let c = Cell::new(3, 3);
        assert_eq!(c.offset(DIRECTIONS[0]), c.up());
        assert_eq!(c.offset(DIRECTIONS[1]), c.down());
        assert_eq!(c.offset(DIRECTIONS[2]), c.left());
        assert_eq!(c.offset(DIRECTIONS[3]), c.right());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 1, 0], vec![1, 1]]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
        assert!(matches!(Grid::from_rows(vec![]), Err(Error::EmptyGrid)));
    }

    #[test]
    fn test_get_and_solid() {
        let grid = Grid::from_rows(vec![vec![0, 2], vec![1, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(Cell::new(0, 1)), Some(2));
        assert_eq!(grid.get(Cell::new(5, 5)), None);
        assert!(grid.is_solid(Cell::new(1, 0)));
        assert!(grid.is_open(Cell::new(0, 0)));
        assert!(!grid.is_open(Cell::new(-1, 0)));
        assert_eq!(grid.solid_count(), 2);
        assert_eq!(grid.to_rows(), vec![vec![0, 2], vec![1, 0]]);
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(2, 3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[2], Cell::new(0, 2));
        assert_eq!(cells[3], Cell::new(1, 0));
    }

    #[test]
    fn test_scatter_is_deterministic() {
        let a = Grid::scatter(10, 12, 0.4, 7);
        let b = Grid::scatter(10, 12, 0.4, 7);
        assert_eq!(a, b);
        assert_eq!(Grid::scatter(4, 4, 0.0, 1).solid_count(), 0);
        assert_eq!(Grid::scatter(4, 4, 1.0, 1).solid_count(), 16);
    }

    #[test]
    fn test_tile_rect() {
        let (min, max) = tile_rect(Cell::new(2, 3), 32.0);
        assert_eq!(min, Vec2::new(96.0, 64.0));
        assert_eq!(max, Vec2::new(128.0, 96.0));
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let grid: Grid = serde_json::from_str("[[0, 1, 0], [1, 1, 0]]").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.is_solid(Cell::new(1, 1)));
        assert_eq!(serde_json::to_string(&grid).unwrap(), "[[0,1,0],[1,1,0]]");

        assert!(serde_json::from_str::<Grid>("[[1, 1, 1], [1]]").is_err());
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        // The raw field layout is no longer accepted
        assert!(serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"tiles":[1]}"#).is_err());
    }
}
