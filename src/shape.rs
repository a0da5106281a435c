//! The capability surface shared by every shape.
//!
//! [`GeometricShape`] is implemented by [`Circle`], [`Polygon`] and every
//! [`PolygonKind`]. Mixed-shape predicates dispatch over the closed set of
//! shape variants with an exhaustive match, so a circle can be tested
//! against a square as easily as against another circle.
//!
//! # Example
//!
//! ```
//! use planum::{Circle, GeometricShape, Point, Shape, Square};
//!
//! let p = |x, y| Point::new(x, y).unwrap();
//! let scene: Vec<Shape> = vec![
//!     Circle::new(p(3.0, 3.0), 2.0).unwrap().into(),
//!     Square::new(&[p(4.0, 2.0), p(4.0, 4.0), p(6.0, 4.0), p(6.0, 2.0)]).unwrap().into(),
//! ];
//!
//! assert!(scene[0].intersects(&scene[1]));
//! assert!(!scene[1].contains(&scene[0]));
//! ```

use crate::error::GeometryError;
use crate::polygon::{Polygon, PolygonKind, Rectangle, Square, Triangle};
use crate::primitives::{Circle, Point, VirtualPoint, Vector};
use std::fmt;

/// Any shape, owned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A polygon of any kind.
    Polygon(Polygon),
}

/// Any shape, borrowed.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    /// A circle.
    Circle(&'a Circle),
    /// A polygon of any kind.
    Polygon(&'a Polygon),
}

impl ShapeRef<'_> {
    /// Perimeter of the shape.
    pub fn perimeter(self) -> f64 {
        match self {
            ShapeRef::Circle(c) => c.perimeter(),
            ShapeRef::Polygon(p) => p.perimeter(),
        }
    }

    /// Centroid of the shape.
    pub fn centroid(self) -> Point {
        match self {
            ShapeRef::Circle(c) => c.center(),
            ShapeRef::Polygon(p) => p.centroid(),
        }
    }

    /// Returns `true` if the boundaries of the two shapes cross.
    pub fn intersects(self, other: ShapeRef<'_>) -> bool {
        match (self, other) {
            (ShapeRef::Circle(a), ShapeRef::Circle(b)) => a.intersects_circle(b),
            (ShapeRef::Circle(a), ShapeRef::Polygon(b)) => a.intersects_polygon(b),
            (ShapeRef::Polygon(a), ShapeRef::Circle(b)) => a.intersects_circle(b),
            (ShapeRef::Polygon(a), ShapeRef::Polygon(b)) => a.intersects_polygon(b),
        }
    }

    /// Returns `true` if the boundaries of the two shapes touch or cross.
    pub fn intersects_inclusive(self, other: ShapeRef<'_>) -> bool {
        match (self, other) {
            (ShapeRef::Circle(a), ShapeRef::Circle(b)) => a.intersects_circle_inclusive(b),
            (ShapeRef::Circle(a), ShapeRef::Polygon(b)) => a.intersects_polygon_inclusive(b),
            (ShapeRef::Polygon(a), ShapeRef::Circle(b)) => a.intersects_circle_inclusive(b),
            (ShapeRef::Polygon(a), ShapeRef::Polygon(b)) => a.intersects_polygon_inclusive(b),
        }
    }

    /// Returns `true` if `other` lies inside this shape.
    pub fn contains(self, other: ShapeRef<'_>) -> bool {
        match (self, other) {
            (ShapeRef::Circle(a), ShapeRef::Circle(b)) => a.contains_circle(b),
            (ShapeRef::Circle(a), ShapeRef::Polygon(b)) => a.contains_polygon(b),
            (ShapeRef::Polygon(a), ShapeRef::Circle(b)) => a.contains_circle(b),
            (ShapeRef::Polygon(a), ShapeRef::Polygon(b)) => a.contains_polygon(b),
        }
    }
}

/// Operations every shape supports.
///
/// Transformations never modify the receiver. They return a new shape of
/// the same type, or an error if the result would break one of the type's
/// invariants (leaving the first quadrant, a rotated square no longer
/// passing as a square, and so on).
pub trait GeometricShape: Sized {
    /// Borrowed view used for mixed-shape dispatch.
    fn as_shape(&self) -> ShapeRef<'_>;

    /// Rotates the shape by `angle` radians around `anchor`.
    fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError>;

    /// Translates the shape by a vector.
    fn translate(&self, vector: Vector) -> Result<Self, GeometryError>;

    /// Length of the boundary.
    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }

    /// The shape's center: the center of a circle, or the mean of a
    /// polygon's vertices.
    fn centroid(&self) -> Point {
        self.as_shape().centroid()
    }

    /// Returns `true` if the boundaries of the two shapes cross.
    ///
    /// Touching does not count, and neither does one shape lying entirely
    /// inside the other.
    fn intersects<S: GeometricShape>(&self, other: &S) -> bool {
        self.as_shape().intersects(other.as_shape())
    }

    /// Like [`intersects`](Self::intersects), but touching boundaries count.
    fn intersects_inclusive<S: GeometricShape>(&self, other: &S) -> bool {
        self.as_shape().intersects_inclusive(other.as_shape())
    }

    /// Returns `true` if `other` lies inside this shape.
    fn contains<S: GeometricShape>(&self, other: &S) -> bool {
        self.as_shape().contains(other.as_shape())
    }

    /// Rotates the shape by `angle` radians around its centroid.
    fn rotate_about_centroid(&self, angle: f64) -> Result<Self, GeometryError> {
        self.rotate(angle, self.centroid())
    }

    /// Rotates the shape by `degrees` around `anchor`.
    fn rotate_degrees(
        &self,
        degrees: f64,
        anchor: impl Into<VirtualPoint>,
    ) -> Result<Self, GeometryError> {
        self.rotate(degrees.to_radians(), anchor)
    }

    /// Rotates the shape by `degrees` around its centroid.
    fn rotate_degrees_about_centroid(&self, degrees: f64) -> Result<Self, GeometryError> {
        self.rotate_about_centroid(degrees.to_radians())
    }

    /// Translates the shape so that its centroid lands on `target`.
    fn move_centroid(&self, target: Point) -> Result<Self, GeometryError> {
        self.translate(Vector::between(self.centroid(), target))
    }
}

impl GeometricShape for Circle {
    #[inline]
    fn as_shape(&self) -> ShapeRef<'_> {
        ShapeRef::Circle(self)
    }

    fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        Circle::rotate(self, angle, anchor)
    }

    fn translate(&self, vector: Vector) -> Result<Self, GeometryError> {
        Circle::translate(self, vector)
    }

    // A circle is symmetric about its own center
    fn rotate_about_centroid(&self, _angle: f64) -> Result<Self, GeometryError> {
        Ok(*self)
    }

    fn move_centroid(&self, target: Point) -> Result<Self, GeometryError> {
        Circle::move_centroid(self, target)
    }
}

impl<K: PolygonKind> GeometricShape for K {
    #[inline]
    fn as_shape(&self) -> ShapeRef<'_> {
        ShapeRef::Polygon(self.polygon())
    }

    fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        K::from_polygon(self.polygon().rotate(angle, anchor)?)
    }

    fn translate(&self, vector: Vector) -> Result<Self, GeometryError> {
        K::from_polygon(self.polygon().translate(vector)?)
    }
}

impl GeometricShape for Shape {
    fn as_shape(&self) -> ShapeRef<'_> {
        match self {
            Shape::Circle(c) => ShapeRef::Circle(c),
            Shape::Polygon(p) => ShapeRef::Polygon(p),
        }
    }

    fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        Ok(match self {
            Shape::Circle(c) => Shape::Circle(c.rotate(angle, anchor)?),
            Shape::Polygon(p) => Shape::Polygon(p.rotate(angle, anchor)?),
        })
    }

    fn translate(&self, vector: Vector) -> Result<Self, GeometryError> {
        Ok(match self {
            Shape::Circle(c) => Shape::Circle(c.translate(vector)?),
            Shape::Polygon(p) => Shape::Polygon(p.translate(vector)?),
        })
    }

    fn rotate_about_centroid(&self, angle: f64) -> Result<Self, GeometryError> {
        match self {
            Shape::Circle(c) => Ok(Shape::Circle(*c)),
            Shape::Polygon(p) => Ok(Shape::Polygon(p.rotate(angle, p.centroid())?)),
        }
    }
}

impl<'a> From<&'a Circle> for ShapeRef<'a> {
    fn from(circle: &'a Circle) -> Self {
        ShapeRef::Circle(circle)
    }
}

impl<'a> From<&'a Polygon> for ShapeRef<'a> {
    fn from(polygon: &'a Polygon) -> Self {
        ShapeRef::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Rectangle> for Shape {
    fn from(rectangle: Rectangle) -> Self {
        Shape::Polygon(rectangle.into_polygon())
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Polygon(square.into_polygon())
    }
}

impl From<Triangle> for Shape {
    fn from(triangle: Triangle) -> Self {
        Shape::Polygon(triangle.into_polygon())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => c.fmt(f),
            Shape::Polygon(p) => p.fmt(f),
        }
    }
}
