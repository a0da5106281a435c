//! Core polygon type and its predicates.

use super::validate;
use crate::error::{GeometryError, ParseError};
use crate::io::text;
use crate::primitives::{Circle, LineSegment, Point, VirtualPoint, Vector};
use std::fmt;
use std::str::FromStr;

/// An immutable simple polygon.
///
/// Built from an ordered ring of at least three first-quadrant vertices. Side
/// `i` joins vertex `i` to vertex `i + 1`, and the last side closes the ring.
/// Construction rejects rings with a vertex folding back onto the line of the
/// side two steps behind it, and rings whose non-adjacent sides cross.
///
/// Two polygons are equal when they describe the same cycle of vertices, in
/// either direction and from any starting vertex.
///
/// # Example
///
/// ```
/// use planum::{LineSegment, Point, Polygon};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let square = Polygon::new(&[p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0), p(2.0, 1.0)]).unwrap();
/// assert_eq!(square.perimeter(), 4.0);
///
/// let cut = LineSegment::new(p(0.0, 4.0), p(3.0, 0.0)).unwrap();
/// assert!(square.intersects_segment(&cut));
///
/// // Same ring, clockwise and starting elsewhere
/// let same = Polygon::new(&[p(2.0, 2.0), p(1.0, 2.0), p(1.0, 1.0), p(2.0, 1.0)]).unwrap();
/// assert_eq!(square, same);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "RawPolygon", try_from = "RawPolygon")
)]
pub struct Polygon {
    vertices: Vec<Point>,
    sides: Vec<LineSegment>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPolygon {
    vertices: Vec<Point>,
}

#[cfg(feature = "serde")]
impl From<Polygon> for RawPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            vertices: polygon.vertices,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolygon> for Polygon {
    type Error = GeometryError;

    fn try_from(raw: RawPolygon) -> Result<Self, Self::Error> {
        Self::from_vec(raw.vertices)
    }
}

impl Polygon {
    /// Creates a polygon from its vertex ring.
    ///
    /// The vertices are copied; the caller's slice is not retained.
    pub fn new(vertices: &[Point]) -> Result<Self, GeometryError> {
        Self::from_vec(vertices.to_vec())
    }

    pub(crate) fn from_vec(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        let sides = validate::build_sides(&vertices)?;
        validate::validate(&vertices, &sides)?;
        Ok(Self { vertices, sides })
    }

    /// The vertices, in ring order.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The sides, side `i` starting at vertex `i`.
    #[inline]
    pub fn sides(&self) -> &[LineSegment] {
        &self.sides
    }

    /// Number of sides (equal to the number of vertices).
    #[inline]
    pub fn num_sides(&self) -> usize {
        self.sides.len()
    }

    /// Sum of the side lengths.
    pub fn perimeter(&self) -> f64 {
        self.sides.iter().map(LineSegment::length).sum()
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Point {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
        Point::from_non_negative(sx / n, sy / n)
    }

    /// Returns `true` if any side crosses the segment.
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.sides.iter().any(|side| side.intersects(segment))
    }

    /// Returns `true` if any side touches or crosses the segment.
    pub fn intersects_segment_inclusive(&self, segment: &LineSegment) -> bool {
        self.sides.iter().any(|side| side.intersects_inclusive(segment))
    }

    /// Returns `true` if the boundaries of the two polygons cross.
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        self.sides.iter().any(|side| other.intersects_segment(side))
    }

    /// Returns `true` if the boundaries of the two polygons touch or cross.
    pub fn intersects_polygon_inclusive(&self, other: &Polygon) -> bool {
        self.sides
            .iter()
            .any(|side| other.intersects_segment_inclusive(side))
    }

    /// Returns `true` if the circle's boundary crosses a side.
    #[inline]
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        circle.intersects_polygon(self)
    }

    /// Returns `true` if the circle's boundary touches or crosses a side.
    #[inline]
    pub fn intersects_circle_inclusive(&self, circle: &Circle) -> bool {
        circle.intersects_polygon_inclusive(self)
    }

    /// Returns `true` if the point lies inside the polygon or on its boundary.
    ///
    /// Interior points are found by casting a ray towards `+x` and counting
    /// side crossings.
    pub fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        let point = point.into();
        if self.sides.iter().any(|side| side.contains(point)) {
            return true;
        }

        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if ((vi.y() > point.y()) != (vj.y() > point.y()))
                && (point.x() < (vj.x() - vi.x()) * (point.y() - vi.y()) / (vj.y() - vi.y()) + vi.x())
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }

    /// Returns `true` if `other` lies inside this polygon.
    ///
    /// Boundaries may touch but not cross.
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        !self.intersects_polygon(other) && other.vertices.iter().all(|&v| self.contains_point(v))
    }

    /// Returns `true` if the circle lies inside this polygon.
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        !circle.intersects_polygon(self)
            && !circle.contains_polygon(self)
            && self.contains_point(circle.center())
    }

    fn map_vertices(
        &self,
        f: impl Fn(Point) -> Result<Point, GeometryError>,
    ) -> Result<Self, GeometryError> {
        let vertices = self
            .vertices
            .iter()
            .map(|&v| f(v))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_vec(vertices)
    }

    /// Rotates every vertex by `angle` radians around `anchor`.
    ///
    /// Fails if a vertex leaves the first quadrant.
    pub fn rotate(&self, angle: f64, anchor: impl Into<VirtualPoint>) -> Result<Self, GeometryError> {
        let anchor = anchor.into();
        self.map_vertices(|v| v.rotate(angle, anchor))
    }

    /// Rotates every vertex by `degrees` around `anchor`.
    pub fn rotate_degrees(
        &self,
        degrees: f64,
        anchor: impl Into<VirtualPoint>,
    ) -> Result<Self, GeometryError> {
        self.rotate(degrees.to_radians(), anchor)
    }

    /// Translates every vertex by a vector.
    pub fn translate(&self, vector: Vector) -> Result<Self, GeometryError> {
        self.map_vertices(|v| v.translate(vector))
    }

    /// Translates the polygon so that its centroid lands on `target`.
    pub fn move_centroid(&self, target: Point) -> Result<Self, GeometryError> {
        self.translate(Vector::between(self.centroid(), target))
    }

    fn position_of(&self, vertex: Point) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        let Some(start) = other.position_of(self.vertices[0]) else {
            return false;
        };

        let at = |offset: isize| {
            let index = (start as isize + offset).rem_euclid(n as isize);
            other.vertices[index as usize]
        };
        let direction = if self.vertices[1] == at(1) {
            1
        } else if self.vertices[1] == at(-1) {
            -1
        } else {
            return false;
        };

        (2..n).all(|i| self.vertices[i] == at(i as isize * direction))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Poligono de {} vertices: {}",
            self.vertices.len(),
            text::format_points(&self.vertices)
        )
    }
}

/// Parses `"N x0 y0 ... x(N-1) y(N-1)"`.
impl FromStr for Polygon {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_vec(Point::parse_list(s)?)?)
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

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        let vertices: Vec<Point> = coords.iter().map(|&(x, y)| p(x, y)).collect();
        Polygon::new(&vertices).unwrap()
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment::new(p(x1, y1), p(x2, y2)).unwrap()
    }

    fn unit_square() -> Polygon {
        poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)])
    }

    #[test]
    fn test_new_builds_closing_side() {
        let square = unit_square();
        assert_eq!(square.num_sides(), 4);
        assert_eq!(square.sides()[3].first_point(), p(2.0, 1.0));
        assert_eq!(square.sides()[3].second_point(), p(1.0, 1.0));
    }

    #[test]
    fn test_new_rejects_invalid_rings() {
        assert!(matches!(
            Polygon::new(&[p(0.0, 0.0), p(1.0, 1.0)]),
            Err(GeometryError::TooFewVertices { count: 2 })
        ));
        assert!(matches!(
            Polygon::new(&[p(0.0, 0.0), p(2.0, 2.0), p(2.0, 0.0), p(0.0, 2.0)]),
            Err(GeometryError::SelfIntersection { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_collinear_vertex() {
        assert!(matches!(
            "4 0 0 0 3 3 3 2 2".parse::<Polygon>(),
            Err(ParseError::Geometry(GeometryError::CollinearVertex { .. }))
        ));
    }

    #[test]
    fn test_parse() {
        let parsed: Polygon = "4 1 1 1 2 2 2 2 1".parse().unwrap();
        assert_eq!(parsed, unit_square());
        assert!(matches!(
            "4 1 1 1 2 2 2".parse::<Polygon>(),
            Err(ParseError::CoordinateCount { .. })
        ));
    }

    #[test]
    fn test_perimeter_and_centroid() {
        let triangle = poly(&[(0.0, 0.0), (3.0, 0.0), (0.0, 4.0)]);
        assert_relative_eq!(triangle.perimeter(), 12.0);
        let c = triangle.centroid();
        assert_relative_eq!(c.x(), 1.0);
        assert_relative_eq!(c.y(), 4.0 / 3.0);
    }

    #[test]
    fn test_intersects_segment() {
        let square = unit_square();
        assert!(square.intersects_segment(&seg(0.0, 4.0, 3.0, 0.0)));
        assert!(!square.intersects_segment(&seg(5.0, 5.0, 6.0, 7.0)));
        // touching a corner only counts inclusively
        let corner = seg(0.0, 0.0, 1.0, 1.0);
        assert!(!square.intersects_segment(&corner));
        assert!(square.intersects_segment_inclusive(&corner));
    }

    #[test]
    fn test_construction_copies_vertices() {
        let mut vertices = vec![p(1.0, 1.0), p(1.0, 2.0), p(2.0, 2.0), p(2.0, 1.0)];
        let square = Polygon::new(&vertices).unwrap();
        vertices[0] = p(50.0, 50.0);
        vertices[2] = p(60.0, 60.0);
        assert!(square.intersects_segment(&seg(0.0, 4.0, 3.0, 0.0)));
        assert_eq!(square.vertices()[0], p(1.0, 1.0));
    }

    #[test]
    fn test_intersects_polygon() {
        let a = poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let b = poly(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
        let far = poly(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0)]);
        let adjacent = poly(&[(2.0, 0.0), (2.0, 2.0), (4.0, 2.0), (4.0, 0.0)]);
        assert!(a.intersects_polygon(&b));
        assert!(b.intersects_polygon(&a));
        assert!(!a.intersects_polygon(&far));
        assert!(!a.intersects_polygon(&adjacent));
        assert!(a.intersects_polygon_inclusive(&adjacent));
    }

    #[test]
    fn test_contains_point() {
        let l_shape = poly(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]);
        assert!(l_shape.contains_point(p(1.0, 1.0)));
        assert!(l_shape.contains_point(p(1.0, 3.0)));
        assert!(l_shape.contains_point(p(3.0, 1.0)));
        assert!(!l_shape.contains_point(p(3.0, 3.0)));
        assert!(!l_shape.contains_point(p(5.0, 1.0)));
        // boundary and vertices
        assert!(l_shape.contains_point(p(4.0, 1.0)));
        assert!(l_shape.contains_point(p(2.0, 2.0)));
        // ray passing through a vertex
        assert!(l_shape.contains_point(p(1.0, 2.0)));
        assert!(!l_shape.contains_point(p(5.0, 2.0)));
    }

    #[test]
    fn test_contains_polygon() {
        let outer = poly(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let inner = poly(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]);
        let straddling = poly(&[(8.0, 8.0), (8.0, 12.0), (12.0, 12.0), (12.0, 8.0)]);
        assert!(outer.contains_polygon(&inner));
        assert!(!inner.contains_polygon(&outer));
        assert!(!outer.contains_polygon(&straddling));
    }

    #[test]
    fn test_contains_circle() {
        let outer = poly(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let inside = Circle::new(p(5.0, 5.0), 2.0).unwrap();
        let crossing = Circle::new(p(9.0, 5.0), 2.0).unwrap();
        let around = Circle::new(p(5.0, 5.0), 5.0).unwrap();
        let big = poly(&[(0.0, 0.0), (0.0, 30.0), (30.0, 30.0), (30.0, 0.0)]);
        let elsewhere = Circle::new(p(15.0, 15.0), 15.0).unwrap();
        assert!(outer.contains_circle(&inside));
        assert!(!outer.contains_circle(&crossing));
        assert!(outer.intersects_circle(&crossing));
        assert!(outer.intersects_circle_inclusive(&around));
        assert!(!big.contains_circle(&Circle::new(p(40.0, 40.0), 1.0).unwrap()));
        assert!(!unit_square().contains_circle(&elsewhere));
    }

    #[test]
    fn test_equality_ignores_start_and_direction() {
        let ccw = unit_square();
        let cw = poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)]);
        let shifted = poly(&[(2.0, 2.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0)]);
        assert_eq!(ccw, cw);
        assert_eq!(ccw, shifted);
        assert_eq!(cw, shifted);
    }

    #[test]
    fn test_inequality() {
        let square = unit_square();
        let bigger = poly(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
        let triangle = poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0)]);
        assert_ne!(square, bigger);
        assert_ne!(square, triangle);
        // same vertex set, different ring
        let a = poly(&[(0.0, 0.0), (4.0, 0.0), (3.0, 1.0), (4.0, 4.0), (0.0, 4.0)]);
        let b = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (3.0, 1.0), (0.0, 4.0)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rotate() {
        let square = poly(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]);
        let rotated = square.rotate(PI / 4.0, square.centroid()).unwrap();
        let h = 2.0_f64.sqrt();
        let expected = poly(&[(3.0 - h, 3.0), (3.0, 3.0 + h), (3.0 + h, 3.0), (3.0, 3.0 - h)]);
        assert_eq!(rotated, expected);
        assert_eq!(square, poly(&[(2.0, 2.0), (2.0, 4.0), (4.0, 4.0), (4.0, 2.0)]));
    }

    #[test]
    fn test_rotate_degrees_out_of_quadrant() {
        let square = unit_square();
        assert!(matches!(
            square.rotate_degrees(180.0, VirtualPoint::origin()),
            Err(GeometryError::NegativeCoordinate { .. })
        ));
    }

    #[test]
    fn test_translate_and_move_centroid() {
        let square = unit_square();
        let moved = square.translate(Vector::new(3.0, 1.0)).unwrap();
        assert_eq!(moved, poly(&[(4.0, 2.0), (4.0, 3.0), (5.0, 3.0), (5.0, 2.0)]));

        let centered = square.move_centroid(p(10.0, 10.0)).unwrap();
        assert_eq!(centered.centroid(), p(10.0, 10.0));
        assert_eq!(square.centroid(), p(1.5, 1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            unit_square().to_string(),
            "Poligono de 4 vertices: [(1,1), (1,2), (2,2), (2,1)]"
        );
    }
}
