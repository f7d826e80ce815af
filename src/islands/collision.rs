//! Circle vs outline collision
//!
//! Outlines are zero-thickness segments, so a circle collides with a segment
//! when the nearest point on the segment lies within its radius.

use glam::Vec2;

use super::segment::Segment;

/// Result of a circle vs segment check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the circle touches or overlaps the segment
    pub hit: bool,
    /// Closest point on the segment to the circle center
    pub nearest: Vec2,
    /// Displacement that pushes the circle off the segment (zero on miss)
    pub mtv: Vec2,
    /// Overlap depth (radius minus distance)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss(nearest: Vec2) -> Self {
        Self {
            hit: false,
            nearest,
            mtv: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Result of a circle vs level query
#[derive(Debug, Clone, Default)]
pub struct CircleQuery {
    /// Whether any segment was hit
    pub hit: bool,
    /// One translation vector per colliding segment, in segment order
    pub mtvs: Vec<Vec2>,
}

impl CircleQuery {
    /// Sum of all translation vectors
    pub fn total_mtv(&self) -> Vec2 {
        self.mtvs.iter().copied().sum()
    }
}

/// Project a point onto a segment, clamped to its endpoints
pub fn nearest_point_on_segment(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let line_vec = end - start;
    let line_len_sq = line_vec.length_squared();
    if line_len_sq <= f32::EPSILON {
        return start; // Degenerate segment
    }

    let t = ((point - start).dot(line_vec) / line_len_sq).clamp(0.0, 1.0);
    start + line_vec * t
}

/// Check a circle against one segment
pub fn circle_segment_collision(center: Vec2, radius: f32, segment: &Segment) -> CollisionResult {
    let nearest = nearest_point_on_segment(segment.start, segment.end, center);
    if nearest.distance_squared(center) > radius * radius {
        return CollisionResult::miss(nearest);
    }

    let dist = nearest.distance(center);
    let penetration = radius - dist;
    // Center exactly on the segment has no defined push direction
    let direction = (center - nearest).normalize_or_zero();
    CollisionResult {
        hit: true,
        nearest,
        mtv: direction * penetration,
        penetration,
    }
}

/// Check a circle against every segment, collecting translation vectors
///
/// Vectors are reported in segment order; callers resolve them one at a time.
pub fn test_circle<'a, I>(center: Vec2, radius: f32, segments: I) -> CircleQuery
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mtvs: Vec<Vec2> = segments
        .into_iter()
        .map(|segment| circle_segment_collision(center, radius, segment))
        .filter(|result| result.hit)
        .map(|result| result.mtv)
        .collect();

    CircleQuery {
        hit: !mtvs.is_empty(),
        mtvs,
    }
}

/// Whether a circle touches any segment (stops at the first hit)
pub fn circle_overlaps<'a, I>(center: Vec2, radius: f32, segments: I) -> bool
where
    I: IntoIterator<Item = &'a Segment>,
{
    segments
        .into_iter()
        .any(|segment| circle_segment_collision(center, radius, segment).hit)
}
