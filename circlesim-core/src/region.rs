//! Axis-aligned half-extent rectangles
//!
//! A `Region` is described by its center and half-extents. It serves both as
//! the world boundary and as the domain of every quadtree node.

use glam::Vec2;

/// One of the four quadrants of a region, in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// Order in which children are tried on insertion
    pub const INSERT_ORDER: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    fn signs(self) -> Vec2 {
        match self {
            Quadrant::NorthEast => Vec2::new(1.0, -1.0),
            Quadrant::NorthWest => Vec2::new(-1.0, -1.0),
            Quadrant::SouthEast => Vec2::new(1.0, 1.0),
            Quadrant::SouthWest => Vec2::new(-1.0, 1.0),
        }
    }
}

/// Axis-aligned rectangle stored as center + half-extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Vec2,
    pub half: Vec2,
}

impl Region {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            half: Vec2::new(w, h),
        }
    }

    /// Region spanning `[0, width] x [0, height]`
    pub fn from_size(width: f32, height: f32) -> Self {
        let half = Vec2::new(width, height) * 0.5;
        Self { center: half, half }
    }

    /// Square region centered on `center` with half-extent `extent`
    pub fn around(center: Vec2, extent: f32) -> Self {
        Self {
            center,
            half: Vec2::splat(extent),
        }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    pub fn width(&self) -> f32 {
        self.half.x * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half.y * 2.0
    }

    /// Closed containment test on a single point
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Touching edges count as intersecting
    pub fn intersects(&self, other: &Region) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// The child region covering one quadrant of this region
    pub fn quadrant(&self, quadrant: Quadrant) -> Region {
        let half = self.half * 0.5;
        Region {
            center: self.center + quadrant.signs() * half,
            half,
        }
    }
}
