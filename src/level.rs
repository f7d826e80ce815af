//! Level: a grid plus its islands, computed once on load
//!
//! The grid never changes after construction, so regions, boundaries and
//! outlines are cached for the level's lifetime.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;
use crate::error::{Error, Result};
use crate::grid::{Cell, Grid};
use crate::islands::{
    CircleQuery, ExtentPolicy, OutlineConfig, Segment, boundary_of, build_outline,
    find_all_regions, test_circle,
};

/// One connected island and its derived geometry
#[derive(Debug, Clone, Serialize)]
pub struct Island {
    /// All cells, in flood-fill discovery order
    pub region: Vec<Cell>,
    /// Cells touching empty space or the grid border
    pub boundary: Vec<Cell>,
    /// Merged outline segments (pixel space)
    pub outline: Vec<Segment>,
}

/// Level file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDesc {
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    #[serde(default)]
    pub extent_policy: ExtentPolicy,
    /// Tile codes, one inner array per row
    pub tiles: Vec<Vec<u32>>,
}

fn default_tile_size() -> f32 {
    TILE_SIZE
}

impl LevelDesc {
    pub fn config(&self) -> OutlineConfig {
        OutlineConfig {
            tile_size: self.tile_size,
            extent_policy: self.extent_policy,
        }
    }
}

/// A built level
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    grid: Grid,
    config: OutlineConfig,
    islands: Vec<Island>,
}

impl Level {
    /// Find every island in the grid and outline it
    pub fn build(grid: Grid, config: OutlineConfig) -> Result<Self> {
        if !(config.tile_size.is_finite() && config.tile_size > 0.0) {
            return Err(Error::InvalidTileSize(config.tile_size));
        }
        if grid.solid_count() == 0 {
            log::warn!("Level grid {}x{} has no solid tiles", grid.rows(), grid.cols());
        }

        let islands: Vec<Island> = find_all_regions(&grid)
            .into_iter()
            .map(|region| {
                let boundary = boundary_of(&region, &grid);
                let outline = build_outline(&boundary, &grid, &config);
                log::debug!(
                    "Island: {} cells, {} boundary, {} segments",
                    region.len(),
                    boundary.len(),
                    outline.len()
                );
                Island {
                    region,
                    boundary,
                    outline,
                }
            })
            .collect();

        let level = Self {
            grid,
            config,
            islands,
        };
        log::info!(
            "Level {}x{} ({}): {} islands, {} segments",
            level.grid.rows(),
            level.grid.cols(),
            config.extent_policy.as_str(),
            level.islands.len(),
            level.segment_count()
        );
        Ok(level)
    }

    pub fn from_desc(desc: LevelDesc) -> Result<Self> {
        let config = desc.config();
        let grid = Grid::from_rows(desc.tiles)?;
        Self::build(grid, config)
    }

    /// Parse a JSON level description
    pub fn from_json(json: &str) -> Result<Self> {
        let desc: LevelDesc = serde_json::from_str(json)?;
        Self::from_desc(desc)
    }

    /// Load a JSON level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Loading level from {}", path.display());
        Self::from_json(&json)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// All outline segments, island by island
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.islands.iter().flat_map(|island| island.outline.iter())
    }

    pub fn segment_count(&self) -> usize {
        self.islands.iter().map(|island| island.outline.len()).sum()
    }

    /// Island containing a cell, if any
    pub fn island_at(&self, cell: Cell) -> Option<&Island> {
        if !self.grid.is_solid(cell) {
            return None;
        }
        self.islands
            .iter()
            .find(|island| island.region.contains(&cell))
    }

    /// Test a circle against every outline segment
    pub fn test_circle(&self, center: Vec2, radius: f32) -> CircleQuery {
        test_circle(center, radius, self.segments())
    }
}
