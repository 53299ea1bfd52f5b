//! Triangle type with circumcircle computation.

use super::{Circle, Point, Segment};
use crate::bounds::Aabb2;
use crate::error::TriangulationError;
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// A triangle given by its three vertices.
///
/// Equality compares vertex sets: the same three points in any order are
/// the same triangle.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle<F> {
    pub p1: Point<F>,
    pub p2: Point<F>,
    pub p3: Point<F>,
}

impl<F: Float> Triangle<F> {
    #[inline]
    pub fn new(p1: Point<F>, p2: Point<F>, p3: Point<F>) -> Self {
        Self { p1, p2, p3 }
    }

    #[inline]
    pub fn points(&self) -> [Point<F>; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Returns the edges `p1-p2`, `p2-p3` and `p3-p1`.
    #[inline]
    pub fn edges(&self) -> [Segment<F>; 3] {
        [
            Segment::new(self.p1, self.p2),
            Segment::new(self.p2, self.p3),
            Segment::new(self.p3, self.p1),
        ]
    }

    #[inline]
    pub fn contains_vertex(&self, p: Point<F>) -> bool {
        self.p1 == p || self.p2 == p || self.p3 == p
    }

    /// Returns `true` if `edge` is one of the triangle's edges.
    #[inline]
    pub fn has_edge(&self, edge: Segment<F>) -> bool {
        edge.p1 != edge.p2 && self.contains_vertex(edge.p1) && self.contains_vertex(edge.p2)
    }

    /// The vertex opposite `edge`, if `edge` belongs to this triangle.
    pub fn apex(&self, edge: Segment<F>) -> Option<Point<F>> {
        if !self.has_edge(edge) {
            return None;
        }
        self.points().into_iter().find(|&p| !edge.has_endpoint(p))
    }

    /// Twice the signed area of the triangle in the plane.
    ///
    /// Positive when `p1, p2, p3` wind counter-clockwise, negative when they
    /// wind clockwise, zero when they are collinear.
    #[inline]
    pub fn signed_area(&self) -> F {
        (self.p2.x - self.p1.x) * (self.p3.y - self.p1.y)
            - (self.p2.y - self.p1.y) * (self.p3.x - self.p1.x)
    }

    /// Returns `true` if `p` lies inside the triangle or on its boundary.
    ///
    /// Only meaningful for non-degenerate triangles.
    pub fn contains_point(&self, p: Point<F>, eps: F) -> bool {
        let turns = [
            orient2d(self.p1, self.p2, p, eps),
            orient2d(self.p2, self.p3, p, eps),
            orient2d(self.p3, self.p1, p, eps),
        ];
        !(turns.contains(&Orientation::Clockwise)
            && turns.contains(&Orientation::CounterClockwise))
    }

    /// The axis-aligned rectangle spanned by the vertices.
    pub fn bounds(&self) -> Aabb2<F> {
        let [a, b, c] = self.points();
        Aabb2::from_corners(
            Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        )
    }

    /// Computes the circle passing through all three vertices.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateGeometry`] when the vertices
    /// are collinear, judged relative to the squared length of the longest
    /// edge.
    ///
    /// # Example
    ///
    /// ```
    /// use bubblemesh::{Point, Triangle};
    ///
    /// let t = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0));
    /// let circle = t.circumscribed_circle().unwrap();
    /// assert_eq!(circle.center, Point::new(2.0, 1.5));
    /// assert_eq!(circle.radius, 2.5);
    /// ```
    pub fn circumscribed_circle(&self) -> Result<Circle<F>, TriangulationError> {
        let [a, b, c] = self.points();
        let la = a.x * a.x + a.y * a.y;
        let lb = b.x * b.x + b.y * b.y;
        let lc = c.x * c.x + c.y * c.y;

        let zx = (a.y - b.y) * lc + (b.y - c.y) * la + (c.y - a.y) * lb;
        let zy = (a.x - b.x) * lc + (b.x - c.x) * la + (c.x - a.x) * lb;
        let z = (a.x - b.x) * (c.y - a.y) - (a.y - b.y) * (c.x - a.x);

        let scale = a
            .planar_distance_squared(b)
            .max(b.planar_distance_squared(c))
            .max(c.planar_distance_squared(a));
        if z == F::zero() || z.abs() <= F::epsilon() * scale {
            return Err(TriangulationError::DegenerateGeometry);
        }

        let two_z = z + z;
        let center = Point::new(-zx / two_z, zy / two_z);
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(TriangulationError::DegenerateGeometry);
        }

        Ok(Circle::new(center, center.distance(a)))
    }
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        let ours = self.points();
        let theirs = other.points();
        ours.iter().all(|p| theirs.contains(p)) && theirs.iter().all(|p| ours.contains(p))
    }
}
