//! Triangulation algorithms for point sets.
//!
//! - [`Frontier`] - incremental triangulation driven by growing bubbles,
//!   yielding a [`Snapshot`] per accepted triangle
//! - [`greedy_triangulation`] - shortest-edge-first triangulation
//! - [`empty_circle_violations`] - measures the distance from Delaunay

mod baseline;
mod bubble;
mod frontier;
mod greedy;
mod validate;

pub use baseline::find_baseline;
pub use bubble::{Bubble, DEFAULT_GROWTH};
pub use frontier::{triangulate, Frontier, FrontierConfig, FrontierState, Snapshot};
pub use greedy::greedy_triangulation;
pub use validate::empty_circle_violations;
