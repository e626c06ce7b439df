use crate::engine::Body;
use crate::region::Region;
use glam::Vec2;

/// Advance one body by dt using semi-implicit Euler (v += a*dt, then x += v*dt)
/// and consume its pending acceleration
pub fn integrate(body: &mut Body, dt: f32) {
    body.vel += body.acc * dt;
    body.pos += body.vel * dt;
    body.acc = Vec2::ZERO;
}

/// Clamp a body inside `bounds` and reflect the velocity component of every
/// wall it crossed. No energy is lost.
pub fn reflect_at_bounds(body: &mut Body, bounds: &Region) {
    let r = body.radius();

    if body.pos.x > bounds.right() - r {
        body.pos.x = bounds.right() - r;
        body.vel.x = -body.vel.x;
    } else if body.pos.x < bounds.left() + r {
        body.pos.x = bounds.left() + r;
        body.vel.x = -body.vel.x;
    }

    if body.pos.y > bounds.bottom() - r {
        body.pos.y = bounds.bottom() - r;
        body.vel.y = -body.vel.y;
    } else if body.pos.y < bounds.top() + r {
        body.pos.y = bounds.top() + r;
        body.vel.y = -body.vel.y;
    }
}

/// Integrate then reflect every body
pub fn step(bodies: &mut [Body], bounds: &Region, dt: f32) {
    for body in bodies.iter_mut() {
        integrate(body, dt);
        reflect_at_bounds(body, bounds);
    }
}
