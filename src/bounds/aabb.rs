//! Axis-aligned rectangle.

use crate::primitives::Point;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Heights carried by the corner
/// points are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box from two arbitrary corners, normalizing them so that
    /// `min <= max` componentwise.
    #[inline]
    pub fn from_corners(a: Point<F>, b: Point<F>) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest box containing every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        Some(iter.fold(Self::from_corners(first, first), |aabb, p| Self {
            min: Point::new(aabb.min.x.min(p.x), aabb.min.y.min(p.y)),
            max: Point::new(aabb.max.x.max(p.x), aabb.max.y.max(p.y)),
        }))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Point<F> {
        self.min.midpoint(self.max)
    }

    /// Returns `true` if the point lies inside the box, boundary included.
    #[inline]
    pub fn contains_point(self, p: Point<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if the boxes overlap, touching included.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Distance from a point to the box; 0 if the point is inside.
    pub fn distance_to_point(self, p: Point<F>) -> F {
        let dx = (self.min.x - p.x).max(p.x - self.max.x).max(F::zero());
        let dy = (self.min.y - p.y).max(p.y - self.max.y).max(F::zero());
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert_eq!(aabb.min, Point::new(0.0, 0.0));
        assert_eq!(aabb.max, Point::new(10.0, 10.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.center(), Point::new(5.0, 5.0));
        assert_eq!(
            aabb,
            Aabb2::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
        );
    }

    #[test]
    fn test_from_points() {
        let aabb: Aabb2<f64> = Aabb2::from_points([
            Point::new(1.0, 2.0),
            Point::new(-3.0, 5.0),
            Point::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Point::new(-3.0, -1.0));
        assert_eq!(aabb.max, Point::new(4.0, 5.0));

        assert!(Aabb2::<f64>::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_contains_point_inclusive() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(aabb.contains_point(Point::new(0.0, 10.0)));
        assert!(aabb.contains_point(Point::new(5.0, 5.0)));
        assert!(!aabb.contains_point(Point::new(-0.5, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let a: Aabb2<f64> = Aabb2::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        let touching = Aabb2::from_corners(Point::new(10.0, 2.0), Point::new(12.0, 4.0));
        let apart = Aabb2::from_corners(Point::new(11.0, 0.0), Point::new(12.0, 1.0));
        assert!(a.intersects(touching));
        assert!(touching.intersects(a));
        assert!(!a.intersects(apart));
    }

    #[test]
    fn test_distance_to_point() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(aabb.distance_to_point(Point::new(5.0, 5.0)), 0.0);
        assert_eq!(aabb.distance_to_point(Point::new(15.0, 5.0)), 5.0);
        assert_eq!(aabb.distance_to_point(Point::new(13.0, 14.0)), 5.0);
    }
}
