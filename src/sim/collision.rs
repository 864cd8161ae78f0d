//! Axis-aligned box overlap
//!
//! Boxes are described by their center and full size. Touching edges count
//! as overlap: two boxes are only disjoint when a separating gap is strictly
//! positive on some axis.

use glam::Vec2;

use crate::box_center;

/// An axis-aligned box given by center and full extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Box anchored at its bottom-left corner (buildings, players)
    pub fn from_bottom_left(bottom_left: Vec2, size: Vec2) -> Self {
        Self::new(box_center(bottom_left, size), size)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.size * 0.5
    }

    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        boxes_overlap(self.center, self.size, other.center, other.size)
    }
}

/// Check whether two centered boxes overlap (inclusive of touching edges)
pub fn boxes_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    let half_a = size_a * 0.5;
    let half_b = size_b * 0.5;

    let left_a = center_a.x - half_a.x;
    let right_a = center_a.x + half_a.x;
    let bottom_a = center_a.y - half_a.y;
    let top_a = center_a.y + half_a.y;

    let left_b = center_b.x - half_b.x;
    let right_b = center_b.x + half_b.x;
    let bottom_b = center_b.y - half_b.y;
    let top_b = center_b.y + half_b.y;

    // Separated horizontally
    if right_a < left_b || left_a > right_b {
        return false;
    }
    // Separated vertically
    if top_a < bottom_b || bottom_a > top_b {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        assert!(boxes_overlap(
            Vec2::ZERO,
            Vec2::splat(2.0),
            Vec2::new(1.5, 0.5),
            Vec2::splat(2.0)
        ));
    }

    #[test]
    fn test_separated_boxes() {
        // Horizontal gap
        assert!(!boxes_overlap(
            Vec2::ZERO,
            Vec2::splat(1.0),
            Vec2::new(2.0, 0.0),
            Vec2::splat(1.0)
        ));
        // Vertical gap
        assert!(!boxes_overlap(
            Vec2::ZERO,
            Vec2::splat(1.0),
            Vec2::new(0.0, -2.0),
            Vec2::splat(1.0)
        ));
    }

    #[test]
    fn test_touching_edges_overlap() {
        // A's right edge at x=1, B's left edge at x=1
        assert!(boxes_overlap(
            Vec2::new(0.5, 0.0),
            Vec2::splat(1.0),
            Vec2::new(1.5, 0.0),
            Vec2::splat(1.0)
        ));
        // Corner contact
        assert!(boxes_overlap(
            Vec2::new(0.5, 0.5),
            Vec2::splat(1.0),
            Vec2::new(1.5, 1.5),
            Vec2::splat(1.0)
        ));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
        let inner = Aabb::new(Vec2::new(1.0, -2.0), Vec2::splat(0.4));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_from_bottom_left() {
        let b = Aabb::from_bottom_left(Vec2::new(0.0, 0.0), Vec2::new(2.0, 5.0));
        assert_eq!(b.center, Vec2::new(1.0, 2.5));
        assert_eq!(b.min(), Vec2::ZERO);
        assert_eq!(b.max(), Vec2::new(2.0, 5.0));
    }

    fn coord() -> impl Strategy<Value = f32> {
        -50.0f32..50.0
    }

    fn extent() -> impl Strategy<Value = f32> {
        0.0f32..20.0
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            cx1 in coord(), cy1 in coord(), w1 in extent(), h1 in extent(),
            cx2 in coord(), cy2 in coord(), w2 in extent(), h2 in extent(),
        ) {
            let (c1, s1) = (Vec2::new(cx1, cy1), Vec2::new(w1, h1));
            let (c2, s2) = (Vec2::new(cx2, cy2), Vec2::new(w2, h2));
            prop_assert_eq!(boxes_overlap(c1, s1, c2, s2), boxes_overlap(c2, s2, c1, s1));
        }

        #[test]
        fn prop_box_overlaps_itself(cx in coord(), cy in coord(), w in extent(), h in extent()) {
            let c = Vec2::new(cx, cy);
            let s = Vec2::new(w, h);
            prop_assert!(boxes_overlap(c, s, c, s));
        }

        #[test]
        fn prop_edge_to_edge_contact_overlaps(
            // Integer-valued so edges line up exactly in f32
            x in -20i32..20, y in -20i32..20, w in 1i32..8, h in 1i32..8, w2 in 1i32..8,
        ) {
            let a = Aabb::from_bottom_left(Vec2::new(x as f32, y as f32), Vec2::new(w as f32, h as f32));
            let b = Aabb::from_bottom_left(
                Vec2::new((x + w) as f32, y as f32),
                Vec2::new(w2 as f32, h as f32),
            );
            prop_assert!(a.overlaps(&b));
        }
    }
}
