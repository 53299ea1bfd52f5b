//! Uniform bucket grid over a point set.
//!
//! The grid splits the bounding rectangle of the input into square cells of a
//! fixed size. Each cell owns the points that fall into it; points are only
//! ever removed, never added back. The triangulation engine keeps the cells
//! ordered by distance to the baseline it is working on so that nearby
//! candidates are visited first.
//!
//! # Example
//!
//! ```
//! use bubblemesh::spatial::SpatialGrid;
//! use bubblemesh::Point;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(15.0, 3.0),
//!     Point::new(35.0, 12.0),
//! ];
//! let mut grid = SpatialGrid::new(10.0, points).unwrap();
//! assert_eq!(grid.cells().len(), 8); // 4 x 2 cells
//! assert_eq!(grid.len(), 3);
//!
//! assert!(grid.remove_point(Point::new(15.0, 3.0)));
//! assert_eq!(grid.len(), 2);
//! ```

use crate::bounds::Aabb2;
use crate::error::TriangulationError;
use crate::primitives::{Circle, Point, Segment};
use log::debug;
use num_traits::Float;
use std::cmp::Ordering;

/// Upper bound on the number of cells a grid may allocate.
const MAX_CELLS: usize = 1 << 22;

/// A rectangular bucket holding the points that are still available.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<F> {
    bounds: Aabb2<F>,
    points: Vec<Point<F>>,
}

impl<F: Float> Cell<F> {
    /// Creates an empty cell spanning the two corners, in any order.
    pub fn new(top_left: Point<F>, bottom_right: Point<F>) -> Self {
        Self {
            bounds: Aabb2::from_corners(top_left, bottom_right),
            points: Vec::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb2<F> {
        self.bounds
    }

    #[inline]
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if `p` lies inside the cell rectangle, border included.
    #[inline]
    pub fn contains(&self, p: Point<F>) -> bool {
        self.bounds.contains_point(p)
    }

    /// Distance from the cell center to a segment.
    ///
    /// The center is projected onto the segment's supporting line. When the
    /// projection falls inside the rectangle spanned by the segment, the
    /// distance to the projection is returned; otherwise the distance to the
    /// nearer endpoint.
    pub fn distance_to_segment(&self, segment: Segment<F>) -> F {
        let center = self.bounds.center();
        let ab = segment.direction();
        let len_sq = ab.magnitude_squared();
        let to_p1 = center.planar_distance_squared(segment.p1).sqrt();
        if len_sq <= F::zero() {
            return to_p1;
        }

        let coef = ab.dot(center - segment.p1) / len_sq;
        let foot = segment.p1.planar() + ab * coef;
        if segment.bounds().contains_point(foot) {
            center.planar_distance_squared(foot).sqrt()
        } else {
            to_p1.min(center.planar_distance_squared(segment.p2).sqrt())
        }
    }

    /// Removes `p` from the cell. Returns `false` if it was not there.
    pub fn remove_point(&mut self, p: Point<F>) -> bool {
        match self.points.iter().position(|&q| q == p) {
            Some(idx) => {
                self.points.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// A regular grid of [`Cell`]s built over a point set.
#[derive(Debug, Clone)]
pub struct SpatialGrid<F> {
    bucket_size: F,
    bounds: Option<Aabb2<F>>,
    cells: Vec<Cell<F>>,
    len: usize,
}

impl<F: Float> SpatialGrid<F> {
    /// Builds a grid of square cells with side `bucket_size` over `points`.
    ///
    /// The grid covers the bounding rectangle of the points with at least one
    /// cell per axis. A point goes to the cell selected by flooring its offset
    /// from the lower-left corner, clamped to the last row and column.
    /// An empty point set yields a grid without cells.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidParameter`] if `bucket_size` is
    /// not a positive finite number or is so small that the grid would need
    /// an unreasonable number of cells.
    pub fn new<I>(bucket_size: F, points: I) -> Result<Self, TriangulationError>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        if !bucket_size.is_finite() || bucket_size <= F::zero() {
            return Err(TriangulationError::InvalidParameter(
                "bucket size must be positive and finite",
            ));
        }

        let points: Vec<Point<F>> = points.into_iter().collect();
        let Some(bounds) = Aabb2::from_points(points.iter().copied()) else {
            return Ok(Self {
                bucket_size,
                bounds: None,
                cells: Vec::new(),
                len: 0,
            });
        };

        let columns = axis_cells(bounds.width(), bucket_size)?;
        let rows = axis_cells(bounds.height(), bucket_size)?;
        if columns.saturating_mul(rows) > MAX_CELLS {
            return Err(TriangulationError::InvalidParameter(
                "bucket size too small for the extent of the points",
            ));
        }

        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let x0 = bounds.min.x + bucket_size * index_to_float(col);
                let y0 = bounds.min.y + bucket_size * index_to_float(row);
                cells.push(Cell::new(
                    Point::new(x0, y0),
                    Point::new(x0 + bucket_size, y0 + bucket_size),
                ));
            }
        }

        let len = points.len();
        for p in points {
            let col = bucket_index((p.x - bounds.min.x) / bucket_size, columns);
            let row = bucket_index((p.y - bounds.min.y) / bucket_size, rows);
            cells[row * columns + col].points.push(p);
        }

        debug!("built {columns}x{rows} grid over {len} points");

        Ok(Self {
            bucket_size,
            bounds: Some(bounds),
            cells,
            len,
        })
    }

    #[inline]
    pub fn bucket_size(&self) -> F {
        self.bucket_size
    }

    /// The bounding rectangle of the points the grid was built from.
    #[inline]
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        self.bounds
    }

    /// The cells, in their current order.
    #[inline]
    pub fn cells(&self) -> &[Cell<F>] {
        &self.cells
    }

    /// Number of points still held by the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the remaining points, cell by cell in the current order.
    pub fn points(&self) -> impl Iterator<Item = Point<F>> + '_ {
        self.cells.iter().flat_map(|cell| cell.points.iter().copied())
    }

    /// Reorders the cells by [`Cell::distance_to_segment`], nearest first.
    pub fn sort_by_distance(&mut self, segment: Segment<F>) {
        self.cells.sort_by(|a, b| {
            a.distance_to_segment(segment)
                .partial_cmp(&b.distance_to_segment(segment))
                .unwrap_or(Ordering::Equal)
        });
    }

    /// Iterates over the remaining points inside `circle`.
    ///
    /// Cells whose rectangle lies entirely outside the circle are skipped.
    pub fn points_in_circle(&self, circle: Circle<F>) -> impl Iterator<Item = Point<F>> + '_ {
        self.cells
            .iter()
            .filter(move |cell| cell.bounds.distance_to_point(circle.center) <= circle.radius)
            .flat_map(move |cell| {
                cell.points
                    .iter()
                    .copied()
                    .filter(move |&p| circle.contains(p))
            })
    }

    /// Removes `p` from whichever cell holds it. Returns `false` if no cell
    /// did.
    pub fn remove_point(&mut self, p: Point<F>) -> bool {
        let removed = self
            .cells
            .iter_mut()
            .filter(|cell| cell.contains(p))
            .any(|cell| cell.remove_point(p));
        if removed {
            self.len -= 1;
        }
        removed
    }
}

fn axis_cells<F: Float>(extent: F, bucket_size: F) -> Result<usize, TriangulationError> {
    (extent / bucket_size)
        .ceil()
        .to_usize()
        .map(|n| n.max(1))
        .ok_or(TriangulationError::InvalidParameter(
            "bucket size too small for the extent of the points",
        ))
}

fn bucket_index<F: Float>(offset: F, count: usize) -> usize {
    offset.floor().to_usize().unwrap_or(0).min(count - 1)
}

fn index_to_float<F: Float>(i: usize) -> F {
    F::from(i).unwrap_or_else(F::max_value)
}
