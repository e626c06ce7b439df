//! Test helper utilities for circlesim tests

use crate::engine::{Body, World};
use crate::region::Region;
use crate::runtime::SimulationContext;
use glam::Vec2;
use rand::Rng;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Component-wise approximate equality for vectors
pub fn approx_eq_vec2(a: Vec2, b: Vec2, tol: f32) -> bool {
    approx_eq_f32(a.x, b.x, tol) && approx_eq_f32(a.y, b.y, tol)
}

/// A white body; panics on an invalid radius, which is a broken test
pub fn body(radius: f32, pos: (f32, f32), vel: (f32, f32)) -> Body {
    Body::new(radius, Vec2::new(pos.0, pos.1), Vec2::new(vel.0, vel.1), [1.0; 3])
        .expect("test body radius must be positive")
}

/// Context over the given bodies with default index parameters
pub fn context_with(width: f32, height: f32, bodies: Vec<Body>) -> SimulationContext {
    SimulationContext::from_world(World::with_bodies(width, height, bodies))
}

/// Indices of every point contained in `range`, by linear scan
pub fn brute_force_query(points: &[Vec2], range: &Region) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| range.contains(**p))
        .map(|(i, _)| i)
        .collect()
}

/// Uniform random points inside `bounds`
pub fn random_points<R: Rng>(rng: &mut R, count: usize, bounds: &Region) -> Vec<Vec2> {
    (0..count)
        .map(|_| {
            Vec2::new(
                rng.gen_range(bounds.left()..=bounds.right()),
                rng.gen_range(bounds.top()..=bounds.bottom()),
            )
        })
        .collect()
}

/// Random query region whose center lies in `bounds` and may poke past it
pub fn random_region<R: Rng>(rng: &mut R, bounds: &Region) -> Region {
    let center = random_points(rng, 1, bounds)[0];
    Region::new(
        center.x,
        center.y,
        rng.gen_range(0.5..bounds.half.x),
        rng.gen_range(0.5..bounds.half.y),
    )
}

/// Largest pairwise overlap, 0 when nothing overlaps
pub fn max_overlap(bodies: &[Body]) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let reach = bodies[i].radius() + bodies[j].radius();
            let d = bodies[i].pos.distance(bodies[j].pos);
            worst = worst.max(reach - d);
        }
    }
    worst
}
