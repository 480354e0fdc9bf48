//! Collision detection between axis-aligned squares

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Square box of edge `edge` at `min`
    pub fn square(min: Vec2, edge: f32) -> Self {
        Self::new(min, Vec2::splat(edge))
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 40.0);
        let b = Aabb::square(Vec2::new(30.0, 30.0), 15.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_edge_contact_is_not_overlap() {
        let player = Aabb::square(Vec2::new(100.0, 100.0), 40.0);
        // Enemy left edge == player right edge
        let right = Aabb::square(Vec2::new(140.0, 110.0), 15.0);
        // Enemy bottom edge == player top edge
        let above = Aabb::square(Vec2::new(110.0, 85.0), 15.0);
        assert!(!player.overlaps(&right));
        assert!(!right.overlaps(&player));
        assert!(!player.overlaps(&above));
        assert!(!above.overlaps(&player));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::square(Vec2::ZERO, 40.0);
        let inner = Aabb::square(Vec2::new(10.0, 10.0), 15.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        let a = Aabb::square(Vec2::ZERO, 40.0);
        // Same rows, far to the right
        let b = Aabb::square(Vec2::new(100.0, 10.0), 15.0);
        assert!(!a.overlaps(&b));
    }
}
