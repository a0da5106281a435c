//! Geometric primitives: points, vectors, lines, segments, paths and circles.

mod circle;
mod line;
mod path;
mod point;
mod raster;
mod segment;
mod vector;

pub use circle::Circle;
pub use line::Line;
pub use path::Path;
pub use point::{NaturalPoint, Point, VirtualPoint};
pub use segment::LineSegment;
pub use vector::Vector;
