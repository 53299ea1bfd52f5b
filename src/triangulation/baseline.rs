//! Starting baseline selection.

use crate::error::TriangulationError;
use crate::primitives::{Point, Segment};
use num_traits::Float;
use std::cmp::Ordering;

/// Picks the segment the triangulation starts from.
///
/// The first endpoint is the leftmost point (lowest `y` on ties). The second
/// is taken from the leftmost of the remaining points: among those sharing
/// the smallest `x`, the one closest to the first endpoint in `y` (lowest `y`
/// on ties).
///
/// # Errors
///
/// Returns [`TriangulationError::InsufficientInput`] when `points` holds
/// fewer than two distinct points.
///
/// # Example
///
/// ```
/// use bubblemesh::{find_baseline, Point, Segment};
///
/// let points = vec![
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 3.0),
///     Point::new(2.0, -5.0),
/// ];
/// let baseline = find_baseline(&points).unwrap();
/// assert_eq!(baseline, Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 3.0)));
/// ```
pub fn find_baseline<F: Float>(points: &[Point<F>]) -> Result<Segment<F>, TriangulationError> {
    let first = points
        .iter()
        .copied()
        .min_by(|a, b| cmp_float(a.x, b.x).then_with(|| cmp_float(a.y, b.y)))
        .ok_or(TriangulationError::InsufficientInput { found: 0 })?;

    let others = || points.iter().copied().filter(move |&p| p != first);
    let min_x = others()
        .map(|p| p.x)
        .min_by(|&a, &b| cmp_float(a, b))
        .ok_or(TriangulationError::InsufficientInput { found: 1 })?;

    let second = others()
        .filter(|p| p.x == min_x)
        .min_by(|a, b| {
            cmp_float((a.y - first.y).abs(), (b.y - first.y).abs())
                .then_with(|| cmp_float(a.y, b.y))
        })
        .ok_or(TriangulationError::InsufficientInput { found: 1 })?;

    Ok(Segment::new(first, second))
}

fn cmp_float<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_vertical_pair() {
        let points = pts(&[(10.0, 0.0), (0.0, 10.0), (10.0, 10.0), (0.0, 0.0)]);
        let baseline = find_baseline(&points).unwrap();
        assert_eq!(baseline.p1, Point::new(0.0, 0.0));
        assert_eq!(baseline.p2, Point::new(0.0, 10.0));
    }

    #[test]
    fn test_partner_closest_in_y() {
        let points = pts(&[(0.0, 5.0), (3.0, 20.0), (3.0, 4.0), (3.0, 7.0), (9.0, 5.0)]);
        let baseline = find_baseline(&points).unwrap();
        assert_eq!(baseline.p1, Point::new(0.0, 5.0));
        assert_eq!(baseline.p2, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_ignores_duplicates_of_first() {
        let points = pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 1.0)]);
        let baseline = find_baseline(&points).unwrap();
        assert_eq!(baseline, Segment::from_coords(0.0, 0.0, 5.0, 1.0));
    }

    #[test]
    fn test_insufficient_input() {
        assert_eq!(
            find_baseline::<f64>(&[]),
            Err(TriangulationError::InsufficientInput { found: 0 })
        );
        assert_eq!(
            find_baseline(&pts(&[(1.0, 1.0), (1.0, 1.0)])),
            Err(TriangulationError::InsufficientInput { found: 1 })
        );
    }
}
