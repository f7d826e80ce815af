//! Tile Islands entry point
//!
//! Loads (or generates) a level, prints its island outlines and drops a ball
//! into it to exercise the collision query.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use tile_islands::consts::{COL_COUNT, GRAVITY, ROW_COUNT, SIM_DT, TILE_SIZE};
use tile_islands::physics::{Body, step};
use tile_islands::{Cell, ExtentPolicy, Grid, Level, LevelDesc};

const DEFAULT_LEVEL: &str = include_str!("../levels/platformer.json");

#[derive(Parser, Debug)]
#[command(author, version, about = "Outline tile-map islands and test circle collisions", long_about = None)]
struct Args {
    /// JSON level file (defaults to the bundled platformer level)
    level: Option<PathBuf>,
    /// Generate a random level from this seed instead of loading one
    #[arg(long, conflicts_with = "level")]
    random: Option<u64>,
    /// Solid tile probability for random levels
    #[arg(long, default_value_t = 0.35)]
    density: f32,
    /// Grid border handling: wall-off | exposed-only
    #[arg(long, value_parser = parse_policy)]
    policy: Option<ExtentPolicy>,
    /// Tile edge length in pixels
    #[arg(long)]
    tile_size: Option<f32>,
    /// Physics steps for the ball drop
    #[arg(long, default_value_t = 240)]
    steps: u32,
    /// Print the built level as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn parse_policy(s: &str) -> std::result::Result<ExtentPolicy, String> {
    ExtentPolicy::from_str(s).ok_or_else(|| format!("unknown policy '{s}' (wall-off | exposed-only)"))
}

fn load_desc(args: &Args) -> Result<LevelDesc> {
    let mut desc = if let Some(seed) = args.random {
        log::info!("Generating random level with seed: {}", seed);
        let grid = Grid::scatter(ROW_COUNT, COL_COUNT, args.density, seed);
        LevelDesc {
            tile_size: TILE_SIZE,
            extent_policy: ExtentPolicy::default(),
            tiles: grid.to_rows(),
        }
    } else if let Some(path) = &args.level {
        let json = fs::read_to_string(path).with_context(|| format!("read level {:?}", path))?;
        serde_json::from_str(&json).with_context(|| format!("parse level {:?}", path))?
    } else {
        serde_json::from_str(DEFAULT_LEVEL).context("parse bundled level")?
    };

    if let Some(policy) = args.policy {
        desc.extent_policy = policy;
    }
    if let Some(tile_size) = args.tile_size {
        desc.tile_size = tile_size;
    }
    Ok(desc)
}

/// Center of the open tile in row 1 closest to the middle column
fn spawn_point(level: &Level) -> Option<Vec2> {
    let grid = level.grid();
    let ts = level.config().tile_size;
    let mid = grid.cols() as i32 / 2;
    (0..grid.cols() as i32)
        .map(|col| Cell::new(1, col))
        .filter(|&cell| grid.is_open(cell))
        .min_by_key(|cell| (cell.col - mid).abs())
        .map(|cell| Vec2::new((cell.col as f32 + 0.5) * ts, (cell.row as f32 + 0.5) * ts))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Tile Islands starting...");

    let desc = load_desc(&args)?;
    let level = Level::from_desc(desc).context("build level")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    println!(
        "Level {}x{} tiles, {} islands, {} outline segments",
        level.grid().rows(),
        level.grid().cols(),
        level.islands().len(),
        level.segment_count()
    );
    for (i, island) in level.islands().iter().enumerate() {
        println!(
            "  island {:>3}: {:>4} cells, {:>4} boundary, {:>3} segments",
            i,
            island.region.len(),
            island.boundary.len(),
            island.outline.len()
        );
    }

    let Some(spawn) = spawn_point(&level) else {
        log::warn!("No open tile to drop a ball into");
        return Ok(());
    };

    let radius = level.config().tile_size * 0.25;
    let mut ball = Body::new(spawn, radius);
    let mut contacts = 0;
    for _ in 0..args.steps {
        if step(&mut ball, &level, GRAVITY, SIM_DT) {
            contacts += 1;
        }
    }
    println!(
        "Ball dropped at ({:.1}, {:.1}) came to ({:.1}, {:.1}) after {} steps, {} in contact",
        spawn.x, spawn.y, ball.pos.x, ball.pos.y, args.steps, contacts
    );

    Ok(())
}
