//! Simple polygons and their specialized kinds.
//!
//! [`Polygon`] validates its vertex ring once, at construction; every
//! transformation builds and validates a new ring. [`Rectangle`], [`Square`]
//! and [`Triangle`] wrap a polygon that passed their extra checks.
//!
//! # Example
//!
//! ```
//! use planum::{Point, Polygon, Square};
//!
//! let p = |x, y| Point::new(x, y).unwrap();
//! let ring = [p(1.0, 1.0), p(1.0, 3.0), p(3.0, 3.0), p(3.0, 1.0)];
//!
//! let polygon = Polygon::new(&ring).unwrap();
//! assert!(polygon.contains_point(p(2.0, 2.0)));
//!
//! let square = Square::try_from(polygon).unwrap();
//! assert_eq!(square.to_string(), "Quadrado: [(1,1), (1,3), (3,3), (3,1)]");
//! ```

mod core;
mod kinds;
mod unique;
mod validate;

pub use core::Polygon;
pub use kinds::{PolygonKind, Rectangle, Square, Triangle};
pub use unique::UniquePolygons;
