//! 2D line segment type.

use super::{raster, Line, NaturalPoint, Point, VirtualPoint};
use crate::error::GeometryError;
use crate::tolerance;

/// A bounded piece of a [`Line`] between two distinct endpoints.
///
/// # Example
///
/// ```
/// use planum::{LineSegment, Point};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let s1 = LineSegment::new(p(1.0, 1.0), p(3.0, 2.0)).unwrap();
/// let s2 = LineSegment::new(p(1.0, 3.0), p(2.0, 0.0)).unwrap();
/// assert!(s1.intersects(&s2));
///
/// // Touching at an endpoint is not a crossing
/// let s3 = LineSegment::new(p(3.0, 2.0), p(5.0, 0.0)).unwrap();
/// assert!(!s1.intersects(&s3));
/// assert!(s1.intersects_inclusive(&s3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    first: Point,
    second: Point,
    line: Line,
}

impl LineSegment {
    /// Creates a segment between two distinct points.
    pub fn new(first: Point, second: Point) -> Result<Self, GeometryError> {
        let line = Line::through(first, second)?;
        Ok(Self {
            first,
            second,
            line,
        })
    }

    /// The first endpoint.
    #[inline]
    pub fn first_point(&self) -> Point {
        self.first
    }

    /// The second endpoint.
    #[inline]
    pub fn second_point(&self) -> Point {
        self.second
    }

    /// The line the segment lies on.
    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.first.dist(self.second)
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    fn is_endpoint(&self, p: VirtualPoint) -> bool {
        p == self.first || p == self.second
    }

    /// Returns `true` if `p` lies within the axis-aligned ranges of the endpoints.
    fn spans(&self, p: VirtualPoint) -> bool {
        let (min_x, max_x) = min_max(self.first.x(), self.second.x());
        let (min_y, max_y) = min_max(self.first.y(), self.second.y());
        tolerance::ge(p.x(), min_x)
            && tolerance::le(p.x(), max_x)
            && tolerance::ge(p.y(), min_y)
            && tolerance::le(p.y(), max_y)
    }

    /// Returns `true` if the two segments cross.
    ///
    /// Parallel segments never cross, including collinear overlapping ones,
    /// and meeting at an endpoint of either segment does not count.
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let Some(crossing) = self.line.intersection(&other.line) else {
            return false;
        };
        if self.is_endpoint(crossing) || other.is_endpoint(crossing) {
            return false;
        }
        self.spans(crossing) && other.spans(crossing)
    }

    /// Returns `true` if the two segments share at least one point.
    ///
    /// Unlike [`intersects`](Self::intersects), touching endpoints count, and
    /// parallel segments intersect when they lie on the same line and overlap.
    pub fn intersects_inclusive(&self, other: &LineSegment) -> bool {
        match self.line.intersection(&other.line) {
            Some(crossing) => self.contains(crossing) && other.contains(crossing),
            None => self.overlaps_parallel(other),
        }
    }

    fn overlaps_parallel(&self, other: &LineSegment) -> bool {
        self.line == other.line
            && (self.contains(other.first)
                || self.contains(other.second)
                || other.contains(self.first)
                || other.contains(self.second))
    }

    /// Returns `true` if the segment crosses the line away from its endpoints.
    pub fn intersects_line(&self, line: &Line) -> bool {
        match self.line.intersection(line) {
            Some(crossing) => !self.is_endpoint(crossing) && self.contains(crossing),
            None => false,
        }
    }

    /// Returns `true` if the segment meets the line, endpoints included.
    pub fn intersects_line_inclusive(&self, line: &Line) -> bool {
        match self.line.intersection(line) {
            Some(crossing) => self.contains(crossing),
            None => false,
        }
    }

    /// Returns `true` if `p` lies on the segment, endpoints included.
    pub fn contains(&self, p: impl Into<VirtualPoint>) -> bool {
        let p = p.into();
        self.line.is_collinear(p) && self.spans(p)
    }

    /// Returns `true` if `p` lies on the segment, endpoints excluded.
    pub fn contains_exclusive(&self, p: impl Into<VirtualPoint>) -> bool {
        let p = p.into();
        !self.is_endpoint(p) && self.contains(p)
    }

    /// Grid cells approximating the segment, by Bresenham's algorithm.
    ///
    /// Endpoints are rounded to the nearest integer first. The result holds
    /// exactly `max(|dx|, |dy|) + 1` cells and includes both rounded
    /// endpoints; it is ordered along the dominant axis, which may run from
    /// the second endpoint to the first.
    pub fn rasterize(&self) -> Vec<NaturalPoint> {
        raster::rasterize_segment(self.first, self.second)
    }
}

#[inline]
fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
