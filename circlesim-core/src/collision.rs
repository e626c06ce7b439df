//! Pairwise resolution of overlapping circles
//!
//! Resolution is positional separation along the line of centers followed by
//! a perfectly elastic impulse exchange. Pairs are resolved one at a time and
//! each resolution is visible to the next.

use crate::engine::Body;
use glam::Vec2;

/// Below this center distance the impact direction is considered undefined
pub const MIN_SEPARATION: f32 = 1e-6;

/// Direction used when two centers coincide: A is pushed to -x, B to +x
pub const FALLBACK_DIRECTION: Vec2 = Vec2::X;

/// Resolve an overlapping pair in place. Returns false if the circles were
/// not overlapping and nothing changed.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let impact = b.pos - a.pos;
    let distance = impact.length();
    let reach = a.radius() + b.radius();

    if !(distance < reach) {
        return false;
    }

    let overlap = reach - distance;
    let dir = if distance > MIN_SEPARATION && distance.is_finite() {
        impact / distance
    } else {
        FALLBACK_DIRECTION
    };

    let correction = dir * (overlap * 0.5);
    a.pos -= correction;
    b.pos += correction;

    let delta_vel = a.vel - b.vel;
    let delta_pos = a.pos - b.pos;
    let dist_sq = delta_pos.length_squared();
    if dist_sq <= 0.0 {
        return true;
    }

    let total_mass = a.mass() + b.mass();
    let k = delta_vel.dot(delta_pos) / dist_sq;
    a.vel -= (2.0 * b.mass() / total_mass) * k * delta_pos;
    b.vel += (2.0 * a.mass() / total_mass) * k * delta_pos;

    true
}

/// Resolve bodies `i` and `j` of a slice, `i != j`
pub fn resolve_indices(bodies: &mut [Body], i: usize, j: usize) -> bool {
    debug_assert_ne!(i, j);
    let (a, b) = if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        (&mut lo[i], &mut hi[0])
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        (&mut hi[0], &mut lo[j])
    };
    resolve_pair(a, b)
}
