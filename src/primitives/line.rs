//! 2D infinite line in implicit form.

use super::{Point, VirtualPoint};
use crate::error::GeometryError;
use crate::tolerance;

/// An infinite line `a·x + b·y + c = 0`.
///
/// The implicit form has no trouble with vertical lines. A point on the line
/// is kept alongside the coefficients; it only takes part in equality.
///
/// # Example
///
/// ```
/// use planum::{Line, Point};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let diagonal = Line::through(p(0.0, 0.0), p(2.0, 2.0)).unwrap();
/// assert!(diagonal.is_collinear(p(5.0, 5.0)));
///
/// let other = Line::through(p(0.0, 2.0), p(2.0, 0.0)).unwrap();
/// assert!(diagonal.is_perpendicular(&other));
/// assert_eq!(diagonal.intersection(&other).unwrap(), p(1.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
    point: Point,
}

impl Line {
    /// Creates the line through two distinct points.
    pub fn through(p: Point, q: Point) -> Result<Self, GeometryError> {
        if p == q {
            return Err(GeometryError::CoincidentPoints);
        }
        Ok(Self {
            a: p.y() - q.y(),
            b: q.x() - p.x(),
            c: p.x() * q.y() - q.x() * p.y(),
            point: p,
        })
    }

    /// Creates the line with coefficients `a` and `b` passing through `point`.
    pub fn from_coefficients(a: f64, b: f64, point: Point) -> Result<Self, GeometryError> {
        if tolerance::is_zero(a) && tolerance::is_zero(b) {
            return Err(GeometryError::DegenerateLine);
        }
        Ok(Self {
            a,
            b,
            c: -(a * point.x() + b * point.y()),
            point,
        })
    }

    /// The coefficients `(a, b, c)`.
    #[inline]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// The point this line was built through.
    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Evaluates `a·x + b·y + c` at a point.
    #[inline]
    fn evaluate(&self, p: VirtualPoint) -> f64 {
        self.a * p.x() + self.b * p.y() + self.c
    }

    /// Returns `true` if the point lies on the line.
    #[inline]
    pub fn is_collinear(&self, p: impl Into<VirtualPoint>) -> bool {
        tolerance::is_zero(self.evaluate(p.into()))
    }

    /// Returns `true` if the lines are parallel (or the same line).
    #[inline]
    pub fn is_parallel(&self, other: &Line) -> bool {
        tolerance::is_zero(self.cross(other))
    }

    /// Returns `true` if the lines meet at a right angle.
    #[inline]
    pub fn is_perpendicular(&self, other: &Line) -> bool {
        tolerance::is_zero(self.a * other.a + self.b * other.b)
    }

    #[inline]
    fn cross(&self, other: &Line) -> f64 {
        self.a * other.b - other.a * self.b
    }

    /// Intersection point of two lines, by Cramer's rule.
    ///
    /// Returns `None` if the lines are parallel.
    pub fn intersection(&self, other: &Line) -> Option<VirtualPoint> {
        if self.is_parallel(other) {
            return None;
        }
        let det = self.cross(other);
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Some(VirtualPoint::new(x, y))
    }

    /// The line perpendicular to this one passing through `point`.
    pub fn perpendicular_through(&self, point: Point) -> Line {
        // (a, b) is never degenerate here, so neither is (-b, a)
        Self {
            a: -self.b,
            b: self.a,
            c: -(self.a * point.y() - self.b * point.x()),
            point,
        }
    }
}

/// Two lines are equal if they are the same set of points.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_parallel(other) && self.is_collinear(other.point)
    }
}
