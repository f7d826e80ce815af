//! Tile island analysis
//!
//! Pipeline over a read-only grid:
//! - `region`: flood fill solid cells into disjoint 4-connected islands
//! - `boundary`: keep the cells of an island that touch empty space or the grid border
//! - `outline`: emit exposed tile sides and merge them into straight runs
//! - `collision`: circle queries against the resulting segments

pub mod boundary;
pub mod collision;
pub mod outline;
pub mod region;
pub mod segment;

pub use boundary::{boundary_of, is_boundary};
pub use collision::{
    CircleQuery, CollisionResult, circle_overlaps, circle_segment_collision,
    nearest_point_on_segment, test_circle,
};
pub use outline::{ExtentPolicy, OutlineConfig, build_outline, emit_edges, merge_segments};
pub use region::{VisitedMask, find_all_regions, find_region, find_region_with};
pub use segment::Segment;
