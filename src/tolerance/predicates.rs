//! Orientation and intersection predicates with explicit tolerance.

use crate::primitives::{Point, Segment};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The points lie on one line (within tolerance).
    Collinear,
    /// The turn `p -> q -> r` is clockwise.
    Clockwise,
    /// The turn `p -> q -> r` is counter-clockwise.
    CounterClockwise,
}

impl Orientation {
    /// The opposite turn; `Collinear` stays `Collinear`.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Computes the orientation of the ordered triple `p, q, r`.
///
/// Evaluates `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`: a
/// positive value is a clockwise turn, a negative one counter-clockwise.
/// Values within `eps` of zero are reported as collinear; pass zero for an
/// exact sign test.
///
/// # Example
///
/// ```
/// use bubblemesh::{orient2d, Orientation, Point};
///
/// let p = Point::new(0.0, 0.0);
/// let q = Point::new(4.0, 0.0);
/// assert_eq!(orient2d(p, q, Point::new(2.0, 3.0), 0.0), Orientation::CounterClockwise);
/// assert_eq!(orient2d(p, q, Point::new(2.0, -3.0), 0.0), Orientation::Clockwise);
/// assert_eq!(orient2d(p, q, Point::new(8.0, 0.0), 0.0), Orientation::Collinear);
/// ```
#[inline]
pub fn orient2d<F: Float>(p: Point<F>, q: Point<F>, r: Point<F>, eps: F) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val > eps {
        Orientation::Clockwise
    } else if val < -eps {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether `q` lies within the bounding box of `p` and `r`.
///
/// Only meaningful once `p`, `q`, `r` are known to be collinear.
#[inline]
pub fn on_segment<F: Float>(p: Point<F>, q: Point<F>, r: Point<F>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Tests whether two segments cross.
///
/// Uses the four orientations of each segment's endpoints against the other
/// segment, plus the collinear cases where an endpoint lies on the other
/// segment. Segments that share an endpoint are reported as not
/// intersecting, which lets triangles meet at a vertex.
///
/// The result does not depend on argument order or endpoint order.
///
/// # Example
///
/// ```
/// use bubblemesh::{segments_intersect, Segment};
///
/// let a = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
/// let b = Segment::from_coords(0.0, 10.0, 10.0, 0.0);
/// let c = Segment::from_coords(10.0, 10.0, 20.0, 0.0);
/// assert!(segments_intersect(a, b, 0.0));
/// assert!(!segments_intersect(a, c, 0.0)); // shared endpoint
/// ```
pub fn segments_intersect<F: Float>(s1: Segment<F>, s2: Segment<F>, eps: F) -> bool {
    let (p1, q1) = (s1.p1, s1.p2);
    let (p2, q2) = (s2.p1, s2.p2);

    if p1 == p2 || p1 == q2 || q1 == p2 || q1 == q2 {
        return false;
    }

    let o1 = orient2d(p1, q1, p2, eps);
    let o2 = orient2d(p1, q1, q2, eps);
    let o3 = orient2d(p2, q2, p1, eps);
    let o4 = orient2d(p2, q2, q1, eps);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}
