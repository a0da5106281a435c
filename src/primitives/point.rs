//! 2D point types.
//!
//! [`VirtualPoint`] is a free point anywhere in the plane. [`Point`] is the
//! same thing restricted to the first quadrant (`x >= 0`, `y >= 0`), which is
//! the world every shape in this crate lives in. [`NaturalPoint`] further
//! restricts a point to integer coordinates, the cells of a character grid.
//!
//! Equality on the floating-point types is tolerance-based, which is why
//! neither implements `Eq` or `Hash`. `NaturalPoint` compares exactly.

use super::Vector;
use crate::error::{GeometryError, ParseError};
use crate::io::text;
use crate::tolerance;
use std::fmt;
use std::ops::Sub;

/// Rotates `(x, y)` by `angle` radians around `(ax, ay)`.
#[inline]
fn rotate_coords(x: f64, y: f64, angle: f64, ax: f64, ay: f64) -> (f64, f64) {
    let (sin, cos) = angle.sin_cos();
    let dx = x - ax;
    let dy = y - ay;
    (dx * cos - dy * sin + ax, dx * sin + dy * cos + ay)
}

/// Integer used when displaying a coordinate.
///
/// Truncates toward zero, unless the value is within epsilon of its rounded
/// integer, in which case the rounded integer wins (`6.9999999999` shows as
/// `7`, `7.5` shows as `7`). Values beyond the `i32` range saturate and NaN
/// shows as `0`.
fn display_coordinate(value: f64) -> i32 {
    let rounded = value.round();
    if tolerance::eq(value, rounded) {
        rounded as i32
    } else {
        value.trunc() as i32
    }
}

/// An immutable point anywhere in the plane.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualPoint {
    x: f64,
    y: f64,
}

impl VirtualPoint {
    /// Creates a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The x coordinate.
    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn dist(self, other: impl Into<VirtualPoint>) -> f64 {
        let other = other.into();
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotates the point by `angle` radians around `anchor`.
    pub fn rotate(self, angle: f64, anchor: impl Into<VirtualPoint>) -> Self {
        let anchor = anchor.into();
        let (x, y) = rotate_coords(self.x, self.y, angle, anchor.x, anchor.y);
        Self { x, y }
    }

    /// Rotates the point by `degrees` around `anchor`.
    #[inline]
    pub fn rotate_degrees(self, degrees: f64, anchor: impl Into<VirtualPoint>) -> Self {
        self.rotate(degrees.to_radians(), anchor)
    }

    /// Translates the point by a vector.
    #[inline]
    pub fn translate(self, vector: Vector) -> Self {
        Self::new(self.x + vector.x(), self.y + vector.y())
    }

    /// Parses `"N x0 y0 ... x(N-1) y(N-1)"` into `N` points.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ParseError> {
        text::parse_points(s)
    }

    /// Parses `"x0 y0 ... x(N-1) y(N-1)"` into exactly `count` points.
    pub fn parse_list_exact(s: &str, count: usize) -> Result<Vec<Self>, ParseError> {
        text::parse_points_exact(s, count)
    }
}

impl PartialEq for VirtualPoint {
    fn eq(&self, other: &Self) -> bool {
        tolerance::eq(self.x, other.x) && tolerance::eq(self.y, other.y)
    }
}

impl fmt::Display for VirtualPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})",
            display_coordinate(self.x),
            display_coordinate(self.y)
        )
    }
}

// Point - Point = Vector
impl Sub for VirtualPoint {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Self) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for VirtualPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An immutable point in the first quadrant.
///
/// Construction, rotation and translation all fail with
/// [`GeometryError::NegativeCoordinate`] if the result would have a negative
/// coordinate.
///
/// # Example
///
/// ```
/// use planum::{Point, Vector};
///
/// let p = Point::new(1.0, 2.0).unwrap();
/// assert_eq!(p.translate(Vector::new(3.0, 4.0)).unwrap(), Point::new(4.0, 6.0).unwrap());
/// assert!(p.translate(Vector::new(0.0, -3.0)).is_err());
/// assert!(Point::new(-1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "VirtualPoint", try_from = "VirtualPoint")
)]
pub struct Point(VirtualPoint);

impl Point {
    /// Creates a new point, failing if either coordinate is negative.
    ///
    /// Coordinates within epsilon below zero are accepted, so rotation noise
    /// around an axis does not reject an otherwise valid shape. NaN is rejected.
    pub fn new(x: f64, y: f64) -> Result<Self, GeometryError> {
        if !tolerance::ge(x, 0.0) || !tolerance::ge(y, 0.0) {
            return Err(GeometryError::NegativeCoordinate { x, y });
        }
        Ok(Self(VirtualPoint::new(x, y)))
    }

    /// Builds a point from coordinates known to be non-negative.
    ///
    /// Used where the construction guarantees the invariant, e.g. averages
    /// and extrema of existing points.
    #[inline]
    pub(crate) fn from_non_negative(x: f64, y: f64) -> Self {
        debug_assert!(
            tolerance::ge(x, 0.0) && tolerance::ge(y, 0.0),
            "({x}, {y}) is not a first-quadrant point"
        );
        Self(VirtualPoint::new(x, y))
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self(VirtualPoint::origin())
    }

    /// The x coordinate.
    #[inline]
    pub fn x(self) -> f64 {
        self.0.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(self) -> f64 {
        self.0.y
    }

    /// This point as a free [`VirtualPoint`].
    #[inline]
    pub fn as_virtual(self) -> VirtualPoint {
        self.0
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn dist(self, other: impl Into<VirtualPoint>) -> f64 {
        self.0.dist(other)
    }

    /// Rotates the point by `angle` radians around `anchor`.
    pub fn rotate(self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        Self::try_from(self.0.rotate(angle, anchor))
    }

    /// Rotates the point by `degrees` around `anchor`.
    pub fn rotate_degrees(
        self,
        degrees: f64,
        anchor: impl Into<VirtualPoint>,
    ) -> Result<Self, GeometryError> {
        self.rotate(degrees.to_radians(), anchor)
    }

    /// Translates the point by a vector.
    pub fn translate(self, vector: Vector) -> Result<Self, GeometryError> {
        Self::try_from(self.0.translate(vector))
    }

    /// Parses `"N x0 y0 ... x(N-1) y(N-1)"` into `N` first-quadrant points.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, ParseError> {
        to_points(VirtualPoint::parse_list(s)?)
    }

    /// Parses `"x0 y0 ... x(N-1) y(N-1)"` into exactly `count` first-quadrant points.
    pub fn parse_list_exact(s: &str, count: usize) -> Result<Vec<Self>, ParseError> {
        to_points(VirtualPoint::parse_list_exact(s, count)?)
    }
}

fn to_points(points: Vec<VirtualPoint>) -> Result<Vec<Point>, ParseError> {
    points
        .into_iter()
        .map(|p| Point::try_from(p).map_err(ParseError::from))
        .collect()
}

impl TryFrom<VirtualPoint> for Point {
    type Error = GeometryError;

    fn try_from(p: VirtualPoint) -> Result<Self, Self::Error> {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for VirtualPoint {
    #[inline]
    fn from(p: Point) -> Self {
        p.0
    }
}

impl PartialEq<VirtualPoint> for Point {
    fn eq(&self, other: &VirtualPoint) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Point> for VirtualPoint {
    fn eq(&self, other: &Point) -> bool {
        *self == other.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Point - Point = Vector
impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Self) -> Vector {
        self.0 - other.0
    }
}

/// A first-quadrant point with integer coordinates, i.e. a grid cell.
///
/// Non-negativity is carried by the coordinate type; conversion from a
/// floating-point point fails with [`GeometryError::NotIntegral`] when a
/// coordinate is not (within epsilon) an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalPoint {
    x: u64,
    y: u64,
}

impl NaturalPoint {
    /// Creates a new grid point.
    #[inline]
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Builds a grid point from raster arithmetic that stays within the
    /// (non-negative) bounds of its input.
    #[inline]
    pub(crate) fn from_raster(x: i64, y: i64) -> Self {
        debug_assert!(x >= 0 && y >= 0, "raster cell ({x}, {y}) left the first quadrant");
        Self {
            x: x as u64,
            y: y as u64,
        }
    }

    /// The x coordinate.
    #[inline]
    pub fn x(self) -> u64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub fn y(self) -> u64 {
        self.y
    }

    /// This grid point as a [`Point`].
    #[inline]
    pub fn to_point(self) -> Point {
        Point::from_non_negative(self.x as f64, self.y as f64)
    }
}

impl TryFrom<Point> for NaturalPoint {
    type Error = GeometryError;

    fn try_from(p: Point) -> Result<Self, Self::Error> {
        let (x, y) = (p.x().round(), p.y().round());
        if !tolerance::eq(p.x(), x) || !tolerance::eq(p.y(), y) {
            return Err(GeometryError::NotIntegral { x: p.x(), y: p.y() });
        }
        Ok(Self {
            x: x as u64,
            y: y as u64,
        })
    }
}

impl TryFrom<VirtualPoint> for NaturalPoint {
    type Error = GeometryError;

    fn try_from(p: VirtualPoint) -> Result<Self, Self::Error> {
        Self::try_from(Point::try_from(p)?)
    }
}

impl From<NaturalPoint> for Point {
    #[inline]
    fn from(p: NaturalPoint) -> Self {
        p.to_point()
    }
}

impl From<NaturalPoint> for VirtualPoint {
    #[inline]
    fn from(p: NaturalPoint) -> Self {
        VirtualPoint::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for NaturalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
