//! Point type with an optional height coordinate.

use super::Vec2;
use num_traits::Float;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A point in the plane, optionally carrying a `z` (height) coordinate.
///
/// Generic over floating-point types (`f32` or `f64`).
///
/// Equality and hashing only look at `x` and `y`: two points that differ only
/// in `z` are the same point. A 3D point set therefore collapses onto its
/// planar projection when deduplicated. Distances are 3D when both points
/// carry `z`.
///
/// Coordinates must not be NaN.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<F> {
    pub x: F,
    pub y: F,
    pub z: Option<F>,
}

impl<F: Float> Point<F> {
    /// Creates a planar point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a point with a height coordinate.
    #[inline]
    pub fn with_z(x: F, y: F, z: F) -> Self {
        Self { x, y, z: Some(z) }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns `true` if the point carries a `z` coordinate.
    #[inline]
    pub fn is_3d(self) -> bool {
        self.z.is_some()
    }

    /// Drops the `z` coordinate.
    #[inline]
    pub fn planar(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Squared distance in the plane, ignoring `z`.
    #[inline]
    pub fn planar_distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Squared distance, including `z` when both points carry it.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let planar = self.planar_distance_squared(other);
        match (self.z, other.z) {
            (Some(z1), Some(z2)) => {
                let dz = z2 - z1;
                planar + dz * dz
            }
            _ => planar,
        }
    }

    /// Euclidean distance, including `z` when both points carry it.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Planar midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self::new((self.x + other.x) / two, (self.y + other.y) / two)
    }

    /// Converts the planar part of this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    fn hash_key(self) -> HashKey {
        (key_component(self.x), key_component(self.y))
    }
}

type HashKey = ((u64, i16, i8), (u64, i16, i8));

// -0.0 == 0.0, so both must hash alike.
fn key_component<F: Float>(v: F) -> (u64, i16, i8) {
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}

impl<F: PartialEq> PartialEq for Point<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<F: Float> Eq for Point<F> {}

impl<F: Float> Hash for Point<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_key().hash(state);
    }
}

/// Hashes two points so that the result does not depend on their order.
pub(crate) fn hash_unordered<F: Float, H: Hasher>(a: Point<F>, b: Point<F>, state: &mut H) {
    let (ka, kb) = (a.hash_key(), b.hash_key());
    if ka <= kb {
        (ka, kb).hash(state);
    } else {
        (kb, ka).hash(state);
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point, keeping the height
impl<F: Float> Add<Vec2<F>> for Point<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z,
        }
    }
}

impl<F: Float> Default for Point<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F, F)> for Point<F> {
    fn from((x, y, z): (F, F, F)) -> Self {
        Self::with_z(x, y, z)
    }
}
