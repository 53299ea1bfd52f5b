//! Spatial data structures and queries.
//!
//! - [`SpatialGrid`] - a uniform grid of [`Cell`] buckets used to find the
//!   points near a baseline quickly

mod grid;

pub use grid::{Cell, SpatialGrid};
