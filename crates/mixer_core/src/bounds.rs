use bevy::math::Vec2;

/// Axis-aligned box on the x/y plane. Depth is deliberately not part of
/// the type: squares move in 3D space but drops are judged in 2D, so a
/// square held out in front of the mixer can still land on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb2 {
    min: Vec2,
    max: Vec2,
}

impl Aabb2 {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub const fn min(&self) -> Vec2 {
        self.min
    }

    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Inclusive overlap test: boxes that only touch along an edge still
    /// count as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        let overlap_x = self.max.x >= other.min.x && other.max.x >= self.min.x;
        let overlap_y = self.max.y >= other.min.y && other.max.y >= self.min.y;
        overlap_x && overlap_y
    }

    /// Inclusive point containment, used for pointer hit testing.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Aabb2 {
        Aabb2::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(2.0, 0.0, 3.0, 1.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contained_box_overlaps() {
        let outer = aabb(0.0, 0.0, 10.0, 10.0);
        let inner = aabb(4.0, 4.0, 6.0, 6.0);
        assert!(outer.overlaps(&inner));
    }

    #[test]
    fn shared_edge_counts_as_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(1.0, 0.0, 2.0, 1.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn shared_corner_counts_as_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            (aabb(0.0, 0.0, 1.0, 1.0), aabb(0.5, 0.5, 2.0, 2.0)),
            (aabb(0.0, 0.0, 1.0, 1.0), aabb(1.0, 0.0, 2.0, 1.0)),
            (aabb(0.0, 0.0, 1.0, 1.0), aabb(2.0, 0.0, 3.0, 1.0)),
            (aabb(-3.0, -3.0, -2.0, -2.0), aabb(0.0, 0.0, 1.0, 1.0)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps(&b), b.overlaps(&a), "asymmetric for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn overlap_on_one_axis_only_is_not_overlap() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(0.0, 5.0, 1.0, 6.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn from_center_half_extents_builds_the_expected_corners() {
        let b = Aabb2::from_center_half_extents(Vec2::new(1.0, 2.0), Vec2::new(0.5, 1.0));
        assert_eq!(b.min(), Vec2::new(0.5, 1.0));
        assert_eq!(b.max(), Vec2::new(1.5, 3.0));
    }

    #[test]
    fn contains_is_inclusive_on_the_border() {
        let b = aabb(0.0, 0.0, 2.0, 2.0);
        assert!(b.contains(Vec2::new(1.0, 1.0)));
        assert!(b.contains(Vec2::new(2.0, 0.0)));
        assert!(!b.contains(Vec2::new(2.1, 0.0)));
    }
}
