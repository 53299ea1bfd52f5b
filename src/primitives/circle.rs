//! Circle type.

use super::Point;
use num_traits::Float;

/// A circle defined by center and radius.
///
/// # Example
///
/// ```
/// use bubblemesh::{Circle, Point};
///
/// let circle: Circle<f64> = Circle::new(Point::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point::new(1.0, 0.0)));
/// assert!(!circle.contains(Point::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle<F> {
    pub center: Point<F>,
    /// Radius of the circle (non-negative).
    pub radius: F,
}

impl<F: Float> Circle<F> {
    #[inline]
    pub fn new(center: Point<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle, boundary included.
    ///
    /// Uses the same distance as [`Point::distance`], so a 3D center only
    /// measures height against 3D points.
    #[inline]
    pub fn contains(&self, point: Point<F>) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Checks if a point is strictly inside the circle.
    #[inline]
    pub fn contains_strict(&self, point: Point<F>) -> bool {
        point.distance(self.center) < self.radius
    }
}
