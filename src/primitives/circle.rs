//! 2D circle type.

use super::{LineSegment, Point, VirtualPoint, Vector};
use crate::error::GeometryError;
use crate::log::debug;
use crate::polygon::Polygon;
use crate::tolerance;
use std::f64::consts::TAU;
use std::fmt;

/// A circle lying entirely in the first quadrant.
///
/// "Strict" predicates (`intersects_*`) treat touching the boundary as not
/// intersecting; the `*_inclusive` variants count it.
///
/// # Example
///
/// ```
/// use planum::{Circle, Point};
///
/// let a = Circle::new(Point::new(3.0, 3.0).unwrap(), 2.0).unwrap();
/// let b = Circle::new(Point::new(7.0, 3.0).unwrap(), 2.0).unwrap();
///
/// // Externally tangent
/// assert!(!a.intersects_circle(&b));
/// assert!(a.intersects_circle_inclusive(&b));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawCircle")
)]
pub struct Circle {
    center: Point,
    radius: f64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCircle {
    center: Point,
    radius: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCircle> for Circle {
    type Error = GeometryError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Self::new(raw.center, raw.radius)
    }
}

impl Circle {
    /// Creates a circle.
    ///
    /// Fails if the radius is not positive, or if the circle would cross
    /// either axis.
    pub fn new(center: Point, radius: f64) -> Result<Self, GeometryError> {
        if !(radius > 0.0) {
            debug!(radius, "rejecting circle: non-positive radius");
            return Err(GeometryError::NonPositiveRadius { radius });
        }
        if !tolerance::le(radius, center.x()) || !tolerance::le(radius, center.y()) {
            debug!(
                x = center.x(),
                y = center.y(),
                radius,
                "rejecting circle: crosses an axis"
            );
            return Err(GeometryError::CircleOutOfBounds {
                x: center.x(),
                y: center.y(),
                radius,
            });
        }
        Ok(Self { center, radius })
    }

    /// The center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// The radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Circumference, `2πr`.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns `true` if the boundaries of the two circles cross.
    ///
    /// A circle nested inside the other does not intersect it.
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        !self.nests_with(other) && self.center.dist(other.center) < self.radius + other.radius
    }

    /// Like [`intersects_circle`](Self::intersects_circle), but tangent
    /// circles intersect.
    pub fn intersects_circle_inclusive(&self, other: &Circle) -> bool {
        !self.nests_with(other)
            && tolerance::le(self.center.dist(other.center), self.radius + other.radius)
    }

    fn nests_with(&self, other: &Circle) -> bool {
        self.contains_circle(other) || other.contains_circle(self)
    }

    /// Returns `true` if the segment crosses the circle's boundary.
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.crosses_segment(segment, |d, r| d < r)
    }

    /// Like [`intersects_segment`](Self::intersects_segment), but a segment
    /// tangent to the circle intersects it.
    pub fn intersects_segment_inclusive(&self, segment: &LineSegment) -> bool {
        self.crosses_segment(segment, tolerance::le)
    }

    fn crosses_segment(&self, segment: &LineSegment, within: impl Fn(f64, f64) -> bool) -> bool {
        let first_inside = self.contains_point_exclusive(segment.first_point());
        let second_inside = self.contains_point_exclusive(segment.second_point());
        if first_inside != second_inside {
            return true;
        }
        if first_inside && second_inside {
            return false;
        }

        // Neither endpoint is inside: look at the closest point of the line
        let line = segment.line();
        let Some(foot) = line.intersection(&line.perpendicular_through(self.center)) else {
            return false;
        };
        segment.contains(foot) && within(self.center.dist(foot), self.radius)
    }

    /// Returns `true` if any side of the polygon crosses the circle's boundary.
    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        polygon.sides().iter().any(|side| self.intersects_segment(side))
    }

    /// Like [`intersects_polygon`](Self::intersects_polygon), with tangency
    /// counted as intersection.
    pub fn intersects_polygon_inclusive(&self, polygon: &Polygon) -> bool {
        polygon
            .sides()
            .iter()
            .any(|side| self.intersects_segment_inclusive(side))
    }

    /// Returns `true` if `other` lies inside this circle, boundaries may touch.
    pub fn contains_circle(&self, other: &Circle) -> bool {
        tolerance::le(self.center.dist(other.center), self.radius - other.radius)
    }

    /// Returns `true` if the point lies inside or on the circle.
    pub fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        tolerance::le(self.center.dist(point), self.radius)
    }

    /// Returns `true` if the point lies strictly inside the circle.
    pub fn contains_point_exclusive(&self, point: impl Into<VirtualPoint>) -> bool {
        self.center.dist(point) < self.radius
    }

    /// Returns `true` if both endpoints of the segment lie inside or on the circle.
    pub fn contains_segment(&self, segment: &LineSegment) -> bool {
        self.contains_point(segment.first_point()) && self.contains_point(segment.second_point())
    }

    /// Returns `true` if every vertex of the polygon lies inside or on the circle.
    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.vertices().iter().all(|&v| self.contains_point(v))
    }

    /// Rotates the center by `angle` radians around `anchor`.
    pub fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        Self::new(self.center.rotate(angle, anchor)?, self.radius)
    }

    /// Translates the circle by a vector.
    pub fn translate(&self, vector: Vector) -> Result<Self, GeometryError> {
        Self::new(self.center.translate(vector)?, self.radius)
    }

    /// The same circle centered on `target`.
    pub fn move_centroid(&self, target: Point) -> Result<Self, GeometryError> {
        Self::new(target, self.radius)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && tolerance::eq(self.radius, other.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle: center={} radius={:?}", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(p(x, y), r).unwrap()
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(p(x1, y1), p(x2, y2)).unwrap()
    }

    fn square(x: f64, y: f64, side: f64) -> Polygon {
        Polygon::new(&[p(x, y), p(x, y + side), p(x + side, y + side), p(x + side, y)]).unwrap()
    }

    #[test]
    fn test_new_validates_radius() {
        assert!(matches!(
            Circle::new(p(5.0, 5.0), 0.0),
            Err(GeometryError::NonPositiveRadius { .. })
        ));
        assert!(Circle::new(p(5.0, 5.0), -1.0).is_err());
        assert!(Circle::new(p(5.0, 5.0), f64::NAN).is_err());
    }

    #[test]
    fn test_new_validates_bounds() {
        assert!(matches!(
            Circle::new(p(1.0, 5.0), 2.0),
            Err(GeometryError::CircleOutOfBounds { .. })
        ));
        assert!(Circle::new(p(5.0, 1.0), 2.0).is_err());
        // touching both axes is allowed
        assert!(Circle::new(p(2.0, 2.0), 2.0).is_ok());
    }

    #[test]
    fn test_perimeter() {
        assert_relative_eq!(circle(1.0, 1.0, 1.0).perimeter(), 6.283185307, epsilon = 1e-9);
    }

    #[test]
    fn test_tangent_circles() {
        let a = circle(3.0, 3.0, 2.0);
        let b = circle(7.0, 3.0, 2.0);
        assert!(!a.intersects_circle(&b));
        assert!(a.intersects_circle_inclusive(&b));
    }

    #[test]
    fn test_overlapping_and_separate_circles() {
        let a = circle(3.0, 3.0, 2.0);
        assert!(a.intersects_circle(&circle(6.0, 3.0, 2.0)));
        assert!(!a.intersects_circle_inclusive(&circle(10.0, 3.0, 2.0)));
    }

    #[test]
    fn test_nested_circles_do_not_intersect() {
        let outer = circle(10.0, 10.0, 5.0);
        let inner = circle(11.0, 10.0, 1.0);
        assert!(outer.contains_circle(&inner));
        assert!(!inner.contains_circle(&outer));
        assert!(!outer.intersects_circle(&inner));
        assert!(!inner.intersects_circle(&outer));
        assert!(!inner.intersects_circle_inclusive(&outer));
    }

    #[test]
    fn test_contains_point() {
        let c = circle(5.0, 5.0, 2.0);
        assert!(c.contains_point(p(6.0, 5.0)));
        assert!(c.contains_point(p(7.0, 5.0)));
        assert!(!c.contains_point_exclusive(p(7.0, 5.0)));
        assert!(!c.contains_point(p(8.0, 5.0)));
    }

    #[test]
    fn test_segment_with_one_endpoint_inside() {
        let c = circle(5.0, 5.0, 2.0);
        assert!(c.intersects_segment(&seg(5.0, 5.0, 10.0, 5.0)));
    }

    #[test]
    fn test_segment_inside_does_not_intersect() {
        let c = circle(5.0, 5.0, 2.0);
        let chord = seg(4.0, 5.0, 6.0, 5.0);
        assert!(!c.intersects_segment(&chord));
        assert!(!c.intersects_segment_inclusive(&chord));
        assert!(c.contains_segment(&chord));

        // both endpoints inside, the closest point of the line as well
        let wide = circle(5.0, 5.0, 3.0);
        assert!(!wide.intersects_segment(&chord));
        assert!(!wide.intersects_segment_inclusive(&chord));
    }

    #[test]
    fn test_segment_passing_through() {
        let c = circle(5.0, 5.0, 2.0);
        assert!(c.intersects_segment(&seg(0.0, 5.0, 10.0, 6.0)));
        assert!(!c.contains_segment(&seg(0.0, 5.0, 10.0, 6.0)));
    }

    #[test]
    fn test_segment_missing_the_circle() {
        let c = circle(5.0, 5.0, 2.0);
        // the line passes through the circle but the segment stops short
        assert!(!c.intersects_segment(&seg(0.0, 5.0, 2.0, 5.0)));
        assert!(!c.intersects_segment(&seg(0.0, 9.0, 10.0, 9.0)));
    }

    #[test]
    fn test_tangent_segment() {
        let c = circle(5.0, 5.0, 2.0);
        let tangent = seg(0.0, 7.0, 10.0, 7.0);
        assert!(!c.intersects_segment(&tangent));
        assert!(c.intersects_segment_inclusive(&tangent));
    }

    #[test]
    fn test_polygon_predicates() {
        let c = circle(5.0, 5.0, 2.0);
        assert!(c.intersects_polygon(&square(5.0, 5.0, 4.0)));
        assert!(!c.intersects_polygon(&square(4.5, 4.5, 1.0)));
        assert!(c.contains_polygon(&square(4.5, 4.5, 1.0)));
        assert!(!c.contains_polygon(&square(5.0, 5.0, 4.0)));
        // square touching the circle from above
        assert!(!c.intersects_polygon(&square(4.0, 7.0, 2.0)));
        assert!(c.intersects_polygon_inclusive(&square(4.0, 7.0, 2.0)));
    }

    #[test]
    fn test_rotate_moves_center() {
        let c = circle(4.0, 2.0, 1.0);
        let rotated = c.rotate(PI / 2.0, p(2.0, 2.0)).unwrap();
        assert_eq!(rotated, circle(2.0, 4.0, 1.0));
        assert_eq!(c, circle(4.0, 2.0, 1.0));
    }

    #[test]
    fn test_transform_out_of_bounds() {
        let c = circle(2.0, 2.0, 1.0);
        assert!(matches!(
            c.translate(Vector::new(-1.5, 0.0)),
            Err(GeometryError::CircleOutOfBounds { .. })
        ));
        assert!(matches!(
            c.translate(Vector::new(-3.0, 0.0)),
            Err(GeometryError::NegativeCoordinate { .. })
        ));
    }

    #[test]
    fn test_move_centroid() {
        let c = circle(2.0, 2.0, 1.0);
        assert_eq!(c.move_centroid(p(8.0, 9.0)).unwrap(), circle(8.0, 9.0, 1.0));
    }

    #[test]
    fn test_equality() {
        assert_eq!(circle(3.0, 3.0, 2.0), circle(3.0, 3.0, 2.0 + 1e-12));
        assert_ne!(circle(3.0, 3.0, 2.0), circle(3.0, 3.0, 2.5));
        assert_ne!(circle(3.0, 3.0, 2.0), circle(3.0, 4.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(circle(3.0, 4.0, 2.0).to_string(), "Circle: center=(3,4) radius=2.0");
        assert_eq!(circle(3.0, 4.0, 1.5).to_string(), "Circle: center=(3,4) radius=1.5");
    }
}
