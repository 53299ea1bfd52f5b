//! Bounding rectangles.

mod aabb;

pub use aabb::Aabb2;
