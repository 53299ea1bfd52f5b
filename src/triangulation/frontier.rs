//! Incremental bubble-growing triangulation.
//!
//! A [`Frontier`] keeps a FIFO queue of baselines. Each baseline grows a
//! [`Bubble`] away from the triangle it already belongs to until the bubble
//! captures a remaining point; the point with the widest view of the baseline
//! becomes the apex of a new triangle and its two new edges join the queue.
//!
//! The engine is lazy: every accepted triangle is yielded as a [`Snapshot`].
//!
//! ```
//! use bubblemesh::{Frontier, FrontierConfig, FrontierState, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let mut frontier = Frontier::new(points, FrontierConfig::default()).unwrap();
//! for snapshot in &mut frontier {
//!     let snapshot = snapshot.unwrap();
//!     println!("{} triangles", snapshot.triangles.len());
//! }
//! assert_eq!(frontier.state(), FrontierState::Done);
//! assert_eq!(frontier.triangles().len(), 2);
//! ```

use super::baseline::find_baseline;
use super::bubble::{Bubble, DEFAULT_GROWTH};
use crate::error::TriangulationError;
use crate::primitives::{Point, Segment, Triangle};
use crate::spatial::SpatialGrid;
use crate::tolerance::orient2d;
use log::{debug, info, trace};
use num_traits::Float;
use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

/// Tuning parameters for a [`Frontier`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierConfig<F> {
    /// Side length of the square grid cells.
    pub bucket_size: F,
    /// Factor applied to the bubble radius on every growth step.
    pub growth: F,
    /// Radius beyond which a bubble stops growing and its baseline stalls.
    pub max_radius: F,
    /// Tolerance used when classifying candidates against a baseline.
    pub eps: F,
}

impl<F: Float> Default for FrontierConfig<F> {
    fn default() -> Self {
        Self {
            bucket_size: F::from(100.0).unwrap(),
            growth: F::from(DEFAULT_GROWTH).unwrap(),
            max_radius: F::from(500.0).unwrap(),
            eps: F::zero(),
        }
    }
}

impl<F: Float> FrontierConfig<F> {
    pub fn with_bucket_size(mut self, bucket_size: F) -> Self {
        self.bucket_size = bucket_size;
        self
    }

    pub fn with_growth(mut self, growth: F) -> Self {
        self.growth = growth;
        self
    }

    pub fn with_max_radius(mut self, max_radius: F) -> Self {
        self.max_radius = max_radius;
        self
    }

    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    fn validate(&self) -> Result<(), TriangulationError> {
        if !self.growth.is_finite() || self.growth <= F::one() {
            return Err(TriangulationError::InvalidParameter(
                "growth factor must be finite and greater than one",
            ));
        }
        if !self.max_radius.is_finite() || self.max_radius <= F::zero() {
            return Err(TriangulationError::InvalidParameter(
                "max radius must be positive and finite",
            ));
        }
        if !self.eps.is_finite() || self.eps < F::zero() {
            return Err(TriangulationError::InvalidParameter(
                "eps must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

/// Where a [`Frontier`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierState {
    /// Baselines are still queued.
    Processing,
    /// The queue drained and every point belongs to a triangle.
    Done,
    /// The queue drained with points no bubble could reach.
    Stalled,
    /// An error was yielded; the frontier produces nothing further.
    Failed,
}

/// The triangulation after a triangle has been accepted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot<F> {
    /// Every triangle accepted so far, oldest first.
    pub triangles: Vec<Triangle<F>>,
    /// The bubble that captured the newest triangle's apex.
    pub bubble: Bubble<F>,
}

/// Iterator over the growth of a bubble triangulation.
///
/// Yields one [`Snapshot`] per accepted triangle. Baselines whose bubble
/// reaches [`FrontierConfig::max_radius`] without capturing a point are
/// recorded in [`stalled_baselines`](Frontier::stalled_baselines) and
/// produce no item. After an `Err` is yielded the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Frontier<F> {
    config: FrontierConfig<F>,
    grid: SpatialGrid<F>,
    pending: VecDeque<Segment<F>>,
    triangles: Vec<Triangle<F>>,
    stalled: Vec<Segment<F>>,
    state: FrontierState,
}

impl<F: Float> Frontier<F> {
    /// Prepares a triangulation of `points`.
    ///
    /// Duplicate points (same `x` and `y`) are dropped, keeping the first.
    /// The starting baseline comes from [`find_baseline`]; its endpoints are
    /// taken out of the grid.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InsufficientInput`] for fewer than two
    /// distinct points and [`TriangulationError::InvalidParameter`] for an
    /// out-of-range `config`.
    pub fn new<I>(points: I, config: FrontierConfig<F>) -> Result<Self, TriangulationError>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        config.validate()?;

        let unique = dedup(points);
        if unique.len() < 2 {
            return Err(TriangulationError::InsufficientInput {
                found: unique.len(),
            });
        }

        let baseline = find_baseline(&unique)?;
        let rest = unique
            .iter()
            .copied()
            .filter(|&p| !baseline.has_endpoint(p));
        let grid = SpatialGrid::new(config.bucket_size, rest)?;

        debug!(
            "starting baseline {:?} -> {:?}, {} points queued",
            xy(baseline.p1),
            xy(baseline.p2),
            grid.len()
        );

        Ok(Self {
            config,
            grid,
            pending: VecDeque::from([baseline]),
            triangles: Vec::new(),
            stalled: Vec::new(),
            state: FrontierState::Processing,
        })
    }

    #[inline]
    pub fn config(&self) -> &FrontierConfig<F> {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> FrontierState {
        self.state
    }

    /// The triangles accepted so far.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// Baselines that produced no triangle: their bubble hit the cutoff
    /// radius without finding a point, or they were too short to grow one.
    #[inline]
    pub fn stalled_baselines(&self) -> &[Segment<F>] {
        &self.stalled
    }

    /// Baselines still waiting to be processed.
    pub fn pending_baselines(&self) -> impl Iterator<Item = Segment<F>> + '_ {
        self.pending.iter().copied()
    }

    /// The grid of points not yet used by any triangle.
    #[inline]
    pub fn grid(&self) -> &SpatialGrid<F> {
        &self.grid
    }

    /// Runs the triangulation to completion and returns its triangles.
    ///
    /// # Errors
    ///
    /// Returns the first error the iteration produces.
    pub fn finish(mut self) -> Result<Vec<Triangle<F>>, TriangulationError> {
        for step in &mut self {
            step?;
        }
        Ok(self.triangles)
    }

    fn process(&mut self, baseline: Segment<F>) -> Result<Option<Snapshot<F>>, TriangulationError> {
        let apexes: Vec<Point<F>> = self
            .triangles
            .iter()
            .filter_map(|t| t.apex(baseline))
            .collect();
        if apexes.len() >= 2 {
            trace!("baseline already shared by two triangles");
            return Ok(None);
        }
        if self.grid.is_empty() {
            trace!("no points left for baseline");
            return Ok(None);
        }

        let mut bubble = match Bubble::with_growth(baseline, self.config.growth) {
            Ok(bubble) => bubble,
            Err(TriangulationError::DegenerateGeometry) => {
                info!(
                    "baseline {:?} -> {:?} too short to grow a bubble",
                    xy(baseline.p1),
                    xy(baseline.p2)
                );
                self.stalled.push(baseline);
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        let owned = !apexes.is_empty();
        let ahead = baseline.midpoint() + bubble.growth_direction();
        let ahead_area = Triangle::new(baseline.p1, baseline.p2, ahead).signed_area();
        for apex in apexes {
            let apex_area = Triangle::new(baseline.p1, baseline.p2, apex).signed_area();
            if apex_area * ahead_area > F::zero() {
                bubble.invert()?;
            } else {
                bubble.keep_side();
            }
        }

        self.grid.sort_by_distance(baseline);
        self.grow(&mut bubble);

        // The starting baseline has no triangle to grow away from.
        if !owned && !self.has_candidate(&bubble) {
            trace!("nothing on the normal side of the starting baseline");
            bubble = Bubble::with_growth(baseline, self.config.growth)?;
            bubble.invert()?;
            self.grow(&mut bubble);
        }

        let Some(apex) = self.best_candidate(&bubble) else {
            info!(
                "baseline {:?} -> {:?} stalled at radius {}",
                xy(baseline.p1),
                xy(baseline.p2),
                to_f64(bubble.radius())
            );
            self.stalled.push(baseline);
            return Ok(None);
        };

        if !self.grid.remove_point(apex) {
            return Err(TriangulationError::InvalidState(
                "selected apex missing from the grid",
            ));
        }
        self.triangles.push(Triangle::new(baseline.p1, baseline.p2, apex));
        debug!(
            "triangle {} accepted with apex {:?}, {} points left",
            self.triangles.len(),
            xy(apex),
            self.grid.len()
        );

        for edge in [
            Segment::new(baseline.p1, apex),
            Segment::new(baseline.p2, apex),
        ] {
            if self.triangles.iter().filter(|t| t.has_edge(edge)).count() < 2 {
                self.pending.push_back(edge);
            }
        }
        if !owned {
            // Revisit the starting baseline to fill its other side.
            self.pending.push_back(baseline);
        }

        Ok(Some(Snapshot {
            triangles: self.triangles.clone(),
            bubble,
        }))
    }

    fn grow(&self, bubble: &mut Bubble<F>) {
        let mut steps = 0usize;
        while !self.has_candidate(bubble) && bubble.radius() < self.config.max_radius {
            bubble.adjust();
            steps += 1;
        }
        trace!(
            "bubble grew {steps} times to radius {}",
            to_f64(bubble.radius())
        );
    }

    /// Remaining points inside the bubble, on its growth side, whose triangle
    /// would not overlap the mesh.
    fn candidates<'a>(&'a self, bubble: &Bubble<F>) -> impl Iterator<Item = Point<F>> + 'a {
        let baseline = bubble.initial_segment();
        let side = bubble.side();
        let eps = self.config.eps;
        self.grid
            .points_in_circle(bubble.circle())
            .filter(move |&p| orient2d(baseline.p1, baseline.p2, p, eps) == side)
            .filter(move |&p| !self.overlaps_mesh(baseline, p))
    }

    fn has_candidate(&self, bubble: &Bubble<F>) -> bool {
        self.candidates(bubble).next().is_some()
    }

    /// The candidate seeing the baseline under the widest angle. Ties keep
    /// the first point in cell order.
    fn best_candidate(&self, bubble: &Bubble<F>) -> Option<Point<F>> {
        let baseline = bubble.initial_segment();
        let mut best: Option<(Point<F>, F)> = None;
        for p in self.candidates(bubble) {
            let Some(cos) = (baseline.p1 - p).cos_angle(baseline.p2 - p) else {
                continue;
            };
            if best.map_or(true, |(_, b)| cos < b) {
                best = Some((p, cos));
            }
        }
        best.map(|(p, _)| p)
    }

    /// Whether the triangle on `baseline` with apex `apex` would overlap an
    /// accepted triangle: an edge crossing, a vertex of one inside the other,
    /// or an accepted vertex lying on one of the new edges.
    fn overlaps_mesh(&self, baseline: Segment<F>, apex: Point<F>) -> bool {
        let eps = self.config.eps;
        let candidate = Triangle::new(baseline.p1, baseline.p2, apex);
        let bounds = candidate.bounds();
        let sides = [Segment::new(baseline.p1, apex), Segment::new(baseline.p2, apex)];

        self.triangles
            .iter()
            .filter(|t| t.bounds().intersects(bounds))
            .any(|t| {
                t.edges()
                    .into_iter()
                    .any(|e| sides.iter().any(|s| s.intersects(e, eps)))
                    || t.points().into_iter().any(|v| {
                        !candidate.contains_vertex(v) && candidate.contains_point(v, eps)
                    })
                    || t.contains_point(apex, eps)
            })
    }
}

impl<F: Float> Iterator for Frontier<F> {
    type Item = Result<Snapshot<F>, TriangulationError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state == FrontierState::Processing {
            let Some(baseline) = self.pending.pop_front() else {
                self.state = if self.grid.is_empty() {
                    FrontierState::Done
                } else {
                    FrontierState::Stalled
                };
                debug!(
                    "frontier finished as {:?} with {} triangles, {} points unreached",
                    self.state,
                    self.triangles.len(),
                    self.grid.len()
                );
                return None;
            };

            match self.process(baseline) {
                Ok(Some(snapshot)) => return Some(Ok(snapshot)),
                Ok(None) => continue,
                Err(err) => {
                    self.state = FrontierState::Failed;
                    self.pending.clear();
                    return Some(Err(err));
                }
            }
        }
        None
    }
}

impl<F: Float> FusedIterator for Frontier<F> {}

/// Triangulates `points` in one call.
///
/// # Errors
///
/// See [`Frontier::new`] and [`Frontier::finish`].
///
/// # Example
///
/// ```
/// use bubblemesh::{triangulate, FrontierConfig, Point, Triangle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(4.0, 0.0);
/// let c = Point::new(2.0, 3.0);
/// let triangles = triangulate(vec![a, b, c], FrontierConfig::default()).unwrap();
/// assert_eq!(triangles, vec![Triangle::new(a, b, c)]);
/// ```
pub fn triangulate<F, I>(
    points: I,
    config: FrontierConfig<F>,
) -> Result<Vec<Triangle<F>>, TriangulationError>
where
    F: Float,
    I: IntoIterator<Item = Point<F>>,
{
    Frontier::new(points, config)?.finish()
}

fn dedup<F: Float, I: IntoIterator<Item = Point<F>>>(points: I) -> Vec<Point<F>> {
    let mut seen = HashSet::new();
    points.into_iter().filter(|&p| seen.insert(p)).collect()
}

fn to_f64<F: Float>(v: F) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

fn xy<F: Float>(p: Point<F>) -> (f64, f64) {
    (to_f64(p.x), to_f64(p.y))
}
