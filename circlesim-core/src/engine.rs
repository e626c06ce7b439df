use crate::quadtree::Located;
use crate::region::Region;
use glam::Vec2;
use std::f32::consts::PI;

/// A circular rigid body in the simulation
#[derive(Debug, Clone)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Pending acceleration, consumed and zeroed by integration
    pub acc: Vec2,
    radius: f32,
    mass: f32,
    color: [f32; 3],
}

impl Body {
    /// Create a body; mass is derived from the radius as `π·r²`.
    ///
    /// Returns `None` for a non-positive or non-finite radius.
    pub fn new(radius: f32, pos: Vec2, vel: Vec2, color: [f32; 3]) -> Option<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return None;
        }
        Some(Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            radius,
            mass: PI * radius * radius,
            color,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn momentum(&self) -> Vec2 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

impl Located for Body {
    fn position(&self) -> Vec2 {
        self.pos
    }
}

/// The body store and the fixed world boundary it lives in
#[derive(Debug, Clone)]
pub struct World {
    pub bodies: Vec<Body>,
    bounds: Region,
}

impl World {
    /// An empty world spanning `[0, width] x [0, height]`
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            bodies: Vec::new(),
            bounds: Region::from_size(width, height),
        }
    }

    pub fn with_bodies(width: f32, height: f32, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            bounds: Region::from_size(width, height),
        }
    }

    pub fn bounds(&self) -> Region {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Total linear momentum of every body
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
