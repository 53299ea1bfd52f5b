//! Error types for triangulation operations.

use thiserror::Error;

/// Errors that can occur while building or running a triangulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulationError {
    /// Fewer than two distinct points were supplied, so no baseline exists.
    #[error("insufficient input: need at least 2 distinct points, found {found}")]
    InsufficientInput {
        /// Number of distinct points after deduplication.
        found: usize,
    },

    /// The vertices of a triangle are collinear, so it has no circumcircle.
    #[error("degenerate geometry: triangle vertices are collinear")]
    DegenerateGeometry,

    /// An operation was attempted in a state that forbids it.
    ///
    /// This signals a logic defect rather than bad input and aborts the run.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A configuration value is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}
