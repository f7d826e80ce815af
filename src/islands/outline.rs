//! Outline generation for boundary cells
//!
//! Each exposed tile side becomes a unit segment, then collinear neighbors are
//! greedily merged into maximal straight runs. The result is a set of runs, not
//! a connected path.

use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::consts::TILE_SIZE;
use crate::grid::{Cell, Grid};

/// How tile sides facing outside the grid are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtentPolicy {
    /// Sides facing outside the grid always emit a segment (walled play-field)
    #[default]
    WallOff,
    /// Only sides facing an in-bounds empty tile emit a segment
    ExposedOnly,
}

impl ExtentPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtentPolicy::WallOff => "wall_off",
            ExtentPolicy::ExposedOnly => "exposed_only",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "wall_off" | "wall" => Some(ExtentPolicy::WallOff),
            "exposed_only" | "exposed" => Some(ExtentPolicy::ExposedOnly),
            _ => None,
        }
    }
}

/// Outline generation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Tile edge length in pixels
    pub tile_size: f32,
    /// Treatment of sides on the grid border
    pub extent_policy: ExtentPolicy,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            extent_policy: ExtentPolicy::WallOff,
        }
    }
}

impl OutlineConfig {
    /// Whether the side of a tile facing `neighbor` is exposed
    fn side_exposed(&self, neighbor: Cell, grid: &Grid) -> bool {
        match grid.get(neighbor) {
            Some(code) => code == 0,
            None => self.extent_policy == ExtentPolicy::WallOff,
        }
    }
}

/// Unit segments for every exposed side of the given cells
///
/// Sides are visited left, right, top, bottom per cell.
pub fn emit_edges(cells: &[Cell], grid: &Grid, config: &OutlineConfig) -> Vec<Segment> {
    let ts = config.tile_size;
    let mut lines = Vec::with_capacity(cells.len() * 2);

    for &cell in cells {
        if config.side_exposed(cell.left(), grid) {
            lines.push(Segment::left(cell, ts));
        }
        if config.side_exposed(cell.right(), grid) {
            lines.push(Segment::right(cell, ts));
        }
        if config.side_exposed(cell.up(), grid) {
            lines.push(Segment::top(cell, ts));
        }
        if config.side_exposed(cell.down(), grid) {
            lines.push(Segment::bottom(cell, ts));
        }
    }

    lines
}

/// Greedily merge collinear adjacent segments
///
/// Segments are popped from the back; each popped segment absorbs merge
/// partners from the remaining set until none are left, then is committed.
pub fn merge_segments(mut lines: Vec<Segment>) -> Vec<Segment> {
    let mut merged = Vec::with_capacity(lines.len());

    while let Some(mut curr) = lines.pop() {
        while let Some(i) = lines.iter().position(|line| curr.can_merge(line)) {
            curr = curr.merge(&lines.remove(i));
        }
        merged.push(curr);
    }

    merged
}

/// Outline of a region's boundary cells
pub fn build_outline(boundary: &[Cell], grid: &Grid, config: &OutlineConfig) -> Vec<Segment> {
    let edges = emit_edges(boundary, grid, config);
    let unit_count = edges.len();
    let outline = merge_segments(edges);
    log::trace!("Outline: {} unit edges -> {} segments", unit_count, outline.len());
    outline
}
