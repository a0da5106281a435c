//! planum - A tolerance-aware 2D geometry kernel
//!
//! Points, lines, segments, circles and validated polygons living in the
//! first quadrant. Every comparison goes through a fixed epsilon, so shapes
//! that are rotated or translated and come back to the same place still
//! compare equal.
//!
//! # Example
//!
//! ```
//! use planum::{GeometricShape, Point, Polygon, Rectangle};
//!
//! let p = |x, y| Point::new(x, y).unwrap();
//! let room = Rectangle::from_corners(p(0.0, 0.0), p(10.0, 6.0)).unwrap();
//! let table = Polygon::new(&[p(2.0, 2.0), p(4.0, 2.0), p(3.0, 4.0)]).unwrap();
//!
//! assert!(room.contains(&table));
//! assert!(!room.intersects(&table));
//!
//! // Half turn about its own center: same rectangle, vertices relabelled
//! let turned = room.rotate_degrees_about_centroid(180.0).unwrap();
//! assert_eq!(turned, room);
//! ```
//!
//! # Features
//!
//! - `tracing`: emits debug events for validation failures and trace events
//!   for rasterization.
//! - `serde`: serialization for every shape. Deserialization goes through the
//!   same validating constructors as the rest of the API.

pub mod bounds;
pub mod error;
pub mod io;
pub(crate) mod log;
pub mod polygon;
pub mod primitives;
pub mod shape;
pub mod tolerance;

pub use bounds::BoundingBox;
pub use error::{GeometryError, ParseError};
pub use polygon::{Polygon, PolygonKind, Rectangle, Square, Triangle, UniquePolygons};
pub use primitives::{Circle, Line, LineSegment, NaturalPoint, Path, Point, Vector, VirtualPoint};
pub use shape::{GeometricShape, Shape, ShapeRef};
