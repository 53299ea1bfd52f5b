//! Quality checks for a finished triangulation.

use crate::error::TriangulationError;
use crate::primitives::{Point, Triangle};
use num_traits::Float;

/// Counts the `(triangle, point)` pairs where `point` is not a vertex of
/// `triangle` but lies strictly inside its circumcircle.
///
/// A Delaunay triangulation has no such pairs. The bubble construction
/// usually comes close; the count measures how far it is off.
///
/// # Errors
///
/// Returns [`TriangulationError::DegenerateGeometry`] if a triangle has
/// collinear vertices.
///
/// # Example
///
/// ```
/// use bubblemesh::{empty_circle_violations, Point, Triangle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 0.0);
/// let c = Point::new(2.0, 3.0);
/// let inside = Point::new(2.0, 1.0);
/// let triangles = [Triangle::new(a, b, c)];
/// assert_eq!(empty_circle_violations(&triangles, &[a, b, c]).unwrap(), 0);
/// assert_eq!(empty_circle_violations(&triangles, &[a, b, c, inside]).unwrap(), 1);
/// ```
pub fn empty_circle_violations<F: Float>(
    triangles: &[Triangle<F>],
    points: &[Point<F>],
) -> Result<usize, TriangulationError> {
    let mut count = 0;
    for triangle in triangles {
        let circle = triangle.circumscribed_circle()?;
        count += points
            .iter()
            .filter(|&&p| !triangle.contains_vertex(p) && circle.contains_strict(p))
            .count();
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::{triangulate, FrontierConfig};

    #[test]
    fn test_kite_is_delaunay() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let up = Point::new(2.0, 3.0);
        let down = Point::new(2.0, -3.0);
        let kite = [Triangle::new(a, b, up), Triangle::new(a, b, down)];
        assert_eq!(empty_circle_violations(&kite, &[a, b, up, down]).unwrap(), 0);
    }

    #[test]
    fn test_frontier_output_is_checkable() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 3.0),
        ];
        let triangles = triangulate(points.clone(), FrontierConfig::default()).unwrap();
        assert_eq!(empty_circle_violations(&triangles, &points).unwrap(), 0);
    }

    #[test]
    fn test_sliver_is_reported() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(5.0, 0.5);
        let d = Point::new(5.0, -0.5);
        let sliver = [Triangle::new(a, b, c), Triangle::new(a, b, d)];
        assert_eq!(empty_circle_violations(&sliver, &[a, b, c, d]).unwrap(), 2);
    }

    #[test]
    fn test_degenerate_triangle() {
        let flat = Triangle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        );
        assert_eq!(
            empty_circle_violations(&[flat], &[]),
            Err(TriangulationError::DegenerateGeometry)
        );
    }
}
