//! Open polylines.

use super::{LineSegment, Point};
use crate::error::GeometryError;
use crate::log::debug;
use crate::polygon::Polygon;

/// An open chain of segments through two or more points.
///
/// Segment `i` joins point `i` to point `i + 1`; unlike a polygon the chain
/// is not closed and may cross itself.
///
/// # Example
///
/// ```
/// use planum::{Path, Point, Polygon};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let route = Path::new(&[p(0.0, 0.0), p(3.0, 4.0), p(6.0, 0.0)]).unwrap();
/// assert_eq!(route.length(), 10.0);
///
/// let wall = Polygon::new(&[p(2.0, 2.0), p(2.0, 3.0), p(4.0, 3.0), p(4.0, 2.0)]).unwrap();
/// assert!(route.intersects_polygon(&wall));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    segments: Vec<LineSegment>,
}

impl Path {
    /// Creates a path through `points`, in order.
    ///
    /// Fails with [`GeometryError::TooFewPathPoints`] for fewer than two
    /// points and [`GeometryError::CoincidentPoints`] if two consecutive
    /// points are equal.
    pub fn new(points: &[Point]) -> Result<Self, GeometryError> {
        if points.len() < 2 {
            debug!(count = points.len(), "rejecting path: too few points");
            return Err(GeometryError::TooFewPathPoints {
                count: points.len(),
            });
        }
        let segments = points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            points: points.to_vec(),
            segments,
        })
    }

    /// The points the path goes through.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The segments between consecutive points.
    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Total length of the path.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(LineSegment::length).sum()
    }

    /// Returns `true` if any segment crosses a side of the polygon.
    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.segments
            .iter()
            .any(|segment| polygon.intersects_segment(segment))
    }

    /// Returns `true` if the path crosses any of the polygons.
    pub fn intersects_any<'a>(&self, polygons: impl IntoIterator<Item = &'a Polygon>) -> bool {
        polygons
            .into_iter()
            .any(|polygon| self.intersects_polygon(polygon))
    }
}
