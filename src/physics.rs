//! Platformer kinematics against level outlines
//!
//! Screen-space coordinates: +y points down, so gravity is positive y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::islands::circle_segment_collision;
use crate::level::Level;

/// Usage: `vel' = integrate(vel, acc, dt)`
#[inline]
pub fn integrate(value: Vec2, change: Vec2, dt: f32) -> Vec2 {
    value + change * dt
}

/// A circular moving body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// Advance a body one timestep and push it out of any outline it overlaps
///
/// Returns true if the body touched the level this step.
pub fn step(body: &mut Body, level: &Level, gravity: Vec2, dt: f32) -> bool {
    body.vel = integrate(body.vel, gravity, dt);
    body.pos = integrate(body.pos, body.vel, dt);

    // Each segment is tested from the position left by the previous push, so
    // segments sharing a nearest point (corners, seams) only correct once.
    let mut hit = false;
    for segment in level.segments() {
        let contact = circle_segment_collision(body.pos, body.radius, segment);
        if !contact.hit {
            continue;
        }
        hit = true;
        body.pos += contact.mtv;

        // Cancel the velocity component driving into the surface
        let normal = contact.mtv.normalize_or_zero();
        let into = body.vel.dot(normal);
        if into < 0.0 {
            body.vel -= normal * into;
        }
    }

    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GRAVITY, SIM_DT};
    use crate::grid::{Cell, Grid};
    use crate::islands::OutlineConfig;

    fn floor_level() -> Level {
        // 6x6 grid with a solid bottom row and left column
        let mut grid = Grid::new(6, 6);
        for i in 0..6 {
            grid.set(Cell::new(5, i), 1);
            grid.set(Cell::new(i, 0), 1);
        }
        Level::build(grid, OutlineConfig::default()).unwrap()
    }

    #[test]
    fn test_integrate() {
        let v = integrate(Vec2::new(1.0, 2.0), Vec2::new(10.0, -10.0), 0.5);
        assert_eq!(v, Vec2::new(6.0, -3.0));
    }

    #[test]
    fn test_free_fall_without_contact() {
        let level = floor_level();
        let mut body = Body::new(Vec2::new(96.0, 32.0), 8.0);
        let hit = step(&mut body, &level, GRAVITY, SIM_DT);
        assert!(!hit);
        assert!(body.vel.y > 0.0);
        assert!(body.pos.y > 32.0);
    }

    #[test]
    fn test_body_comes_to_rest_on_floor() {
        let level = floor_level();
        let floor_y = 5.0 * 32.0;
        let mut body = Body::new(Vec2::new(96.0, 100.0), 8.0);

        let mut touched = false;
        for _ in 0..600 {
            touched |= step(&mut body, &level, GRAVITY, SIM_DT);
        }

        assert!(touched);
        // Never sinks meaningfully into the floor
        assert!(body.pos.y <= floor_y - body.radius + 0.5);
        assert!(body.pos.y > floor_y - body.radius - 2.0);
        assert!(body.vel.y.abs() < 5.0);
    }

    #[test]
    fn test_side_wall_stops_horizontal_motion() {
        let level = floor_level();
        let mut body = Body::new(Vec2::new(96.0, 150.0), 8.0);
        body.vel = Vec2::new(-200.0, 0.0);
        let mut touched = false;
        for _ in 0..60 {
            touched |= step(&mut body, &level, Vec2::ZERO, SIM_DT);
        }
        // Left column's exposed face is at x = 32
        assert!(touched);
        assert!(body.pos.x >= 32.0 + body.radius - 0.5);
        assert!(body.vel.x.abs() < 0.001);
    }

    #[test]
    fn test_convex_corner_corrects_once() {
        // Lone tile at (3, 3): top-right corner at (128, 96)
        let mut grid = Grid::new(6, 6);
        grid.set(Cell::new(3, 3), 1);
        let level = Level::build(grid, OutlineConfig::default()).unwrap();

        let corner = Vec2::new(128.0, 96.0);
        let diagonal = Vec2::new(1.0, -1.0).normalize();
        let mut body = Body::new(corner + diagonal * 6.0, 8.0);

        // Top and right edges both report the corner as nearest point
        assert_eq!(level.test_circle(body.pos, body.radius).mtvs.len(), 2);

        assert!(step(&mut body, &level, Vec2::ZERO, 0.0));
        assert!((body.pos.distance(corner) - 8.0).abs() < 0.01);
    }
}
