//! Floating-point geometric primitives.

mod circle;
mod point;
mod segment;
mod triangle;
mod vec2;

pub use circle::Circle;
pub use point::Point;
pub use segment::Segment;
pub use triangle::Triangle;
pub use vec2::Vec2;
