//! Unordered line segment type.

use super::point::hash_unordered;
use super::{Point, Vec2};
use crate::bounds::Aabb2;
use crate::tolerance::segments_intersect;
use num_traits::Float;
use std::hash::{Hash, Hasher};

/// A segment between two points.
///
/// The endpoints are unordered: `Segment::new(a, b) == Segment::new(b, a)`,
/// and both hash alike.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<F> {
    pub p1: Point<F>,
    pub p2: Point<F>,
}

impl<F: Float> Segment<F> {
    #[inline]
    pub fn new(p1: Point<F>, p2: Point<F>) -> Self {
        Self { p1, p2 }
    }

    /// Creates a planar segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Planar direction vector from `p1` to `p2`.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.p2 - self.p1
    }

    /// Length of the segment, measured in 3D when both endpoints carry `z`.
    #[inline]
    pub fn length(self) -> F {
        self.p1.distance(self.p2)
    }

    /// Length of the segment's projection onto the plane.
    #[inline]
    pub fn planar_length(self) -> F {
        self.p1.planar_distance_squared(self.p2).sqrt()
    }

    /// Planar midpoint.
    #[inline]
    pub fn midpoint(self) -> Point<F> {
        self.p1.midpoint(self.p2)
    }

    /// Unit normal of the segment in the plane.
    ///
    /// The normal points toward +x, or toward +y for horizontal segments, so
    /// it does not depend on the order of the endpoints. Returns `None` for a
    /// zero-length segment.
    pub fn normal(self) -> Option<Vec2<F>> {
        let perp = self.direction().perpendicular();
        let oriented = if perp.x < F::zero() || (perp.x == F::zero() && perp.y < F::zero()) {
            -perp
        } else {
            perp
        };
        oriented.normalize()
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn has_endpoint(self, p: Point<F>) -> bool {
        self.p1 == p || self.p2 == p
    }

    /// Returns `true` if the two segments cross.
    ///
    /// Segments that share an endpoint never intersect.
    #[inline]
    pub fn intersects(self, other: Self, eps: F) -> bool {
        segments_intersect(self, other, eps)
    }

    /// The axis-aligned rectangle spanned by the endpoints.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::from_corners(self.p1, self.p2)
    }

    /// Projects `p` onto the segment.
    ///
    /// Returns the closest point on the segment and its parameter `t` in
    /// [0, 1], where `t = 0` is `p1`.
    pub fn closest_point(self, p: Point<F>) -> (Point<F>, F) {
        let v = self.direction();
        let len_sq = v.magnitude_squared();
        if len_sq <= F::epsilon() {
            return (self.p1.planar(), F::zero());
        }

        let t = ((p - self.p1).dot(v) / len_sq).max(F::zero()).min(F::one());
        (self.p1.planar() + v * t, t)
    }

    /// Planar distance from `p` to the closest point of the segment.
    #[inline]
    pub fn distance_to_point(self, p: Point<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.planar_distance_squared(closest).sqrt()
    }
}

impl<F: Float> PartialEq for Segment<F> {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl<F: Float> Eq for Segment<F> {}

impl<F: Float> Hash for Segment<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_unordered(self.p1, self.p2, state);
    }
}

impl<F: Float> From<(Point<F>, Point<F>)> for Segment<F> {
    fn from((p1, p2): (Point<F>, Point<F>)) -> Self {
        Self::new(p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_symmetric_equality_and_hash() {
        let a: Segment<f64> = Segment::from_coords(0.0, 0.0, 3.0, 4.0);
        let b = Segment::from_coords(3.0, 4.0, 0.0, 0.0);
        assert_eq!(a, b);

        let set: HashSet<Segment<f64>> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_ne!(a, Segment::from_coords(0.0, 0.0, 3.0, 5.0));
    }

    #[test]
    fn test_length() {
        let s: Segment<f64> = Segment::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length(), 5.0);

        let s3 = Segment::new(Point::with_z(0.0, 0.0, 0.0), Point::with_z(2.0, 3.0, 6.0));
        assert_eq!(s3.length(), 7.0);
        assert_relative_eq!(s3.planar_length(), 13.0_f64.sqrt());

        // Only one endpoint with height: planar length.
        let mixed = Segment::new(Point::new(0.0, 0.0), Point::with_z(3.0, 4.0, 12.0));
        assert_eq!(mixed.length(), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let m = Segment::from_coords(0.0_f64, 0.0, 10.0, 20.0).midpoint();
        assert_eq!(m, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_normal_orientation() {
        let vertical: Segment<f64> = Segment::from_coords(0.0, 0.0, 0.0, 10.0);
        let n = vertical.normal().unwrap();
        assert_relative_eq!(n.x, 1.0);
        assert_relative_eq!(n.y, 0.0);

        let horizontal: Segment<f64> = Segment::from_coords(5.0, 1.0, 0.0, 1.0);
        let n = horizontal.normal().unwrap();
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 1.0);

        let diagonal: Segment<f64> = Segment::from_coords(0.0, 10.0, 10.0, 0.0);
        let n = diagonal.normal().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.dot(diagonal.direction()), 0.0, epsilon = 1e-12);
        assert!(n.x > 0.0);

        // Reversing the endpoints keeps the normal.
        let r = Segment::new(diagonal.p2, diagonal.p1).normal().unwrap();
        assert_relative_eq!(r.x, n.x);
        assert_relative_eq!(r.y, n.y);
    }

    #[test]
    fn test_normal_degenerate() {
        let s: Segment<f64> = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(s.normal().is_none());
    }

    #[test]
    fn test_closest_point() {
        let s: Segment<f64> = Segment::from_coords(0.0, 0.0, 10.0, 0.0);

        let (c, t) = s.closest_point(Point::new(5.0, 5.0));
        assert_relative_eq!(c.x, 5.0);
        assert_relative_eq!(t, 0.5);

        let (c, t) = s.closest_point(Point::new(-5.0, 1.0));
        assert_eq!(c, Point::new(0.0, 0.0));
        assert_eq!(t, 0.0);

        assert_relative_eq!(s.distance_to_point(Point::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_has_endpoint() {
        let s: Segment<f64> = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        assert!(s.has_endpoint(Point::new(1.0, 1.0)));
        assert!(!s.has_endpoint(Point::new(0.5, 0.5)));
    }
}
