//! Growing empty circle anchored on a baseline.

use crate::error::TriangulationError;
use crate::primitives::{Circle, Point, Segment, Vec2};
use crate::tolerance::{orient2d, Orientation};
use num_traits::Float;

/// Factor applied to the bubble radius by each [`Bubble::adjust`] call.
pub const DEFAULT_GROWTH: f64 = 1.05;

/// A circle through both endpoints of a baseline that grows away from it.
///
/// The bubble starts as the circle whose diameter is the baseline. Every
/// [`adjust`](Bubble::adjust) scales the radius and slides the center along
/// the baseline normal so the circle keeps passing through both endpoints.
/// The first point the circle captures is the apex of a locally optimal
/// triangle on the baseline.
///
/// The bubble grows along [`Segment::normal`] unless it has been
/// [inverted](Bubble::invert), which can happen once.
///
/// Geometry is planar: heights carried by the baseline endpoints are ignored.
///
/// # Example
///
/// ```
/// use bubblemesh::{Bubble, Point, Segment};
///
/// let baseline = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
/// let mut bubble = Bubble::new(baseline).unwrap();
/// assert_eq!(bubble.radius(), 5.0);
///
/// bubble.adjust();
/// assert!(bubble.circle().center.x > 0.0);
///
/// bubble.invert().unwrap();
/// assert!(bubble.circle().center.x < 0.0);
/// assert!(bubble.invert().is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bubble<F> {
    initial_segment: Segment<F>,
    normal: Vec2<F>,
    half_length: F,
    growth: F,
    radius: F,
    circle: Circle<F>,
    inverted: Option<bool>,
}

impl<F: Float> Bubble<F> {
    /// Creates a bubble on `baseline` with the default growth factor.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::DegenerateGeometry`] for a zero-length
    /// baseline.
    pub fn new(baseline: Segment<F>) -> Result<Self, TriangulationError> {
        let growth = F::from(DEFAULT_GROWTH).unwrap();
        Self::with_growth(baseline, growth)
    }

    /// Creates a bubble on `baseline` that grows by `growth` per step.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidParameter`] unless `growth` is a
    /// finite number greater than one, and
    /// [`TriangulationError::DegenerateGeometry`] for a zero-length baseline.
    pub fn with_growth(baseline: Segment<F>, growth: F) -> Result<Self, TriangulationError> {
        if !growth.is_finite() || growth <= F::one() {
            return Err(TriangulationError::InvalidParameter(
                "growth factor must be finite and greater than one",
            ));
        }
        let normal = baseline
            .normal()
            .ok_or(TriangulationError::DegenerateGeometry)?;
        let half_length = baseline.planar_length() / (F::one() + F::one());

        Ok(Self {
            initial_segment: baseline,
            normal,
            half_length,
            growth,
            radius: half_length,
            circle: Circle::new(baseline.midpoint(), half_length),
            inverted: None,
        })
    }

    /// The baseline the bubble is anchored on.
    #[inline]
    pub fn initial_segment(&self) -> Segment<F> {
        self.initial_segment
    }

    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    #[inline]
    pub fn circle(&self) -> Circle<F> {
        self.circle
    }

    #[inline]
    pub fn growth(&self) -> F {
        self.growth
    }

    /// `None` until a side has been chosen, then whether the bubble grows
    /// against the baseline normal.
    #[inline]
    pub fn inverted(&self) -> Option<bool> {
        self.inverted
    }

    /// Grows the radius by the growth factor and moves the center so the
    /// circle still passes through both baseline endpoints.
    pub fn adjust(&mut self) {
        self.radius = self.radius * self.growth;
        self.recenter();
    }

    /// Moves the bubble to the other side of the baseline.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidState`] if the bubble was
    /// already inverted.
    pub fn invert(&mut self) -> Result<(), TriangulationError> {
        if self.inverted == Some(true) {
            return Err(TriangulationError::InvalidState("bubble inverted twice"));
        }
        self.inverted = Some(true);
        self.recenter();
        Ok(())
    }

    /// Records that the bubble stays on the normal side.
    ///
    /// Has no effect once a side has been chosen.
    pub fn keep_side(&mut self) {
        if self.inverted.is_none() {
            self.inverted = Some(false);
        }
    }

    /// The direction the center moves in as the bubble grows.
    #[inline]
    pub fn growth_direction(&self) -> Vec2<F> {
        if self.inverted == Some(true) {
            -self.normal
        } else {
            self.normal
        }
    }

    /// The orientation `orient2d(p1, p2, apex)` of a point on the side of
    /// the baseline the bubble grows into.
    pub fn side(&self) -> Orientation {
        let s = self.initial_segment;
        let ahead: Point<F> = s.midpoint() + self.growth_direction();
        orient2d(s.p1, s.p2, ahead, F::zero())
    }

    fn recenter(&mut self) {
        let offset = (self.radius * self.radius - self.half_length * self.half_length)
            .max(F::zero())
            .sqrt();
        let center = self.initial_segment.midpoint() + self.growth_direction() * offset;
        self.circle = Circle::new(center, self.radius);
    }
}
