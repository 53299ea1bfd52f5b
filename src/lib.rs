//! bubblemesh - Incremental triangulation by growing empty circles
//!
//! Starting from the leftmost edge of a point set, a circle anchored on each
//! frontier edge grows until it captures a point, and that point closes a new
//! triangle. The result approximates a Delaunay triangulation and can be
//! observed one triangle at a time.

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod spatial;
pub mod tolerance;
pub mod triangulation;

pub use error::TriangulationError;
pub use primitives::{Circle, Point, Segment, Triangle, Vec2};
pub use tolerance::{on_segment, orient2d, segments_intersect, Orientation};
pub use triangulation::{
    empty_circle_violations, find_baseline, greedy_triangulation, triangulate, Bubble, Frontier,
    FrontierConfig, FrontierState, Snapshot,
};
