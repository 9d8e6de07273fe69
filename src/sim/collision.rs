//! Collision detection for the flat play field
//!
//! Everything in this game is an axis-aligned box; overlap is the only
//! question the simulation ever asks.

use glam::Vec2;

/// An axis-aligned bounding box, stored as top-left corner + size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// True when the interiors intersect; boxes that merely share an edge
    /// do not count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}
