//! Greedy edge triangulation.

use crate::primitives::{Point, Segment};
use crate::tolerance::{on_segment, orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Builds a triangulation by accepting the shortest edges first.
///
/// Every segment between two distinct points is considered in order of
/// increasing [`Segment::length`], so points carrying a height are ranked by
/// their 3D distance. A segment is kept unless it crosses an already kept
/// segment or runs through another input point. Sharing an endpoint is not a
/// crossing.
///
/// Runs in `O(n^2 log n + n^2 m)` for `n` points and `m` kept edges.
///
/// # Example
///
/// ```
/// use bubblemesh::{greedy_triangulation, Point};
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let edges = greedy_triangulation(&square, 0.0);
/// assert_eq!(edges.len(), 5);
/// ```
pub fn greedy_triangulation<F: Float>(points: &[Point<F>], eps: F) -> Vec<Segment<F>> {
    let mut seen = HashSet::new();
    let points: Vec<Point<F>> = points.iter().copied().filter(|&p| seen.insert(p)).collect();

    let mut candidates: Vec<(F, Segment<F>)> = Vec::with_capacity(points.len() * points.len() / 2);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let segment = Segment::new(a, b);
            candidates.push((segment.length(), segment));
        }
    }
    candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut accepted: Vec<Segment<F>> = Vec::new();
    for (_, segment) in candidates {
        if passes_through_point(segment, &points, eps) {
            continue;
        }
        if accepted.iter().any(|&edge| edge.intersects(segment, eps)) {
            continue;
        }
        accepted.push(segment);
    }
    accepted
}

fn passes_through_point<F: Float>(segment: Segment<F>, points: &[Point<F>], eps: F) -> bool {
    points.iter().any(|&p| {
        !segment.has_endpoint(p)
            && orient2d(segment.p1, segment.p2, p, eps) == Orientation::Collinear
            && on_segment(segment.p1, p, segment.p2)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point<f64>> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_square_sides_and_one_diagonal() {
        let edges = greedy_triangulation(&square(), 0.0);
        assert_eq!(edges.len(), 5);
        for side in [
            Segment::from_coords(0.0, 0.0, 10.0, 0.0),
            Segment::from_coords(10.0, 0.0, 10.0, 10.0),
            Segment::from_coords(10.0, 10.0, 0.0, 10.0),
            Segment::from_coords(0.0, 10.0, 0.0, 0.0),
        ] {
            assert!(edges.contains(&side));
        }
        let d1 = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let d2 = Segment::from_coords(10.0, 0.0, 0.0, 10.0);
        assert!(edges.contains(&d1) ^ edges.contains(&d2));
    }

    #[test]
    fn test_no_crossings() {
        let points: Vec<Point<f64>> = [
            (0.0, 0.0),
            (3.0, 1.0),
            (7.0, 0.5),
            (5.0, 4.0),
            (1.0, 6.0),
            (8.0, 7.0),
            (4.0, 9.0),
        ]
        .iter()
        .map(|&c| c.into())
        .collect();
        let edges = greedy_triangulation(&points, 0.0);
        for (i, a) in edges.iter().enumerate() {
            for b in &edges[i + 1..] {
                assert!(!a.intersects(*b, 0.0));
            }
        }
        // A maximal planar triangulation of n points with h on the hull has
        // 3n - 3 - h edges; here the hull is 5 points.
        assert_eq!(edges.len(), 3 * 7 - 3 - 5);
    }

    #[test]
    fn test_collinear_points_chain() {
        let points: Vec<Point<f64>> = (0..4).map(|i| Point::new(i as f64, 0.0)).collect();
        let edges = greedy_triangulation(&points, 0.0);
        assert_eq!(edges.len(), 3);
        assert!(!edges.contains(&Segment::from_coords(0.0, 0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_heights_change_the_diagonal() {
        let flat = square();
        let raised = vec![
            Point::with_z(0.0, 0.0, 0.0),
            Point::with_z(10.0, 0.0, 0.0),
            Point::with_z(10.0, 10.0, 50.0),
            Point::with_z(0.0, 10.0, 0.0),
        ];
        let rising = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let level = Segment::from_coords(10.0, 0.0, 0.0, 10.0);

        let planar = greedy_triangulation(&flat, 0.0);
        assert!(planar.contains(&rising));

        let edges = greedy_triangulation(&raised, 0.0);
        assert_eq!(edges.len(), 5);
        assert!(edges.contains(&level));
        assert!(!edges.contains(&rising));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(greedy_triangulation::<f64>(&[], 0.0).is_empty());
        let p = Point::new(1.0, 1.0);
        assert!(greedy_triangulation(&[p, p], 0.0).is_empty());
        assert_eq!(greedy_triangulation(&[p, Point::new(2.0, 2.0)], 0.0).len(), 1);
    }
}
