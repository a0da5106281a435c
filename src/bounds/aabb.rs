//! Axis-aligned bounding box.

use crate::error::GeometryError;
use crate::polygon::{Polygon, PolygonKind};
use crate::primitives::{Circle, Point};
use crate::shape::Shape;
use crate::tolerance;

/// An axis-aligned bounding box in the first quadrant.
///
/// Defined by minimum and maximum corners.
///
/// # Example
///
/// ```
/// use planum::{BoundingBox, Point};
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let a = BoundingBox::from_points([p(0.0, 0.0), p(3.0, 1.0), p(1.0, 2.0)]).unwrap();
/// assert_eq!(a.max_point(), p(3.0, 2.0));
///
/// // Boxes that only share an edge are separated
/// let b = BoundingBox::from_corners(p(3.0, 0.0), p(5.0, 2.0));
/// assert!(!a.intersects(&b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    /// Creates a bounding box from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::from_non_negative(a.x().min(b.x()), a.y().min(b.y())),
            max: Point::from_non_negative(a.x().max(b.x()), a.y().max(b.y())),
        }
    }

    /// Creates a bounding box containing a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Creates the smallest bounding box containing every point.
    ///
    /// Fails with [`GeometryError::EmptyPointSet`] if there are no points.
    pub fn from_points<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(GeometryError::EmptyPointSet)?;
        Ok(iter.fold(Self::from_point(first), Self::expand_to_include))
    }

    /// Bounding box of any polygon kind.
    pub fn of_kind<K: PolygonKind>(kind: &K) -> Self {
        kind.polygon().into()
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn min_point(&self) -> Point {
        self.min
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn max_point(&self) -> Point {
        self.max
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point) -> Self {
        Self {
            min: Point::from_non_negative(self.min.x().min(p.x()), self.min.y().min(p.y())),
            max: Point::from_non_negative(self.max.x().max(p.x()), self.max.y().max(p.y())),
        }
    }

    /// Returns the smallest box containing both boxes.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.expand_to_include(other.min).expand_to_include(other.max)
    }

    /// Returns `true` if the point lies inside the box or on its edges.
    pub fn contains_point(&self, p: Point) -> bool {
        tolerance::ge(p.x(), self.min.x())
            && tolerance::le(p.x(), self.max.x())
            && tolerance::ge(p.y(), self.min.y())
            && tolerance::le(p.y(), self.max.y())
    }

    /// Returns `true` if the interiors of the two boxes overlap.
    ///
    /// Boxes whose edges merely touch are separated.
    pub fn intersects(&self, other: &Self) -> bool {
        let separated_x = tolerance::le(self.max.x(), other.min.x())
            || tolerance::ge(self.min.x(), other.max.x());
        let separated_y = tolerance::le(self.max.y(), other.min.y())
            || tolerance::ge(self.min.y(), other.max.y());
        !(separated_x || separated_y)
    }
}

impl From<&Polygon> for BoundingBox {
    fn from(polygon: &Polygon) -> Self {
        let vertices = polygon.vertices();
        vertices[1..]
            .iter()
            .fold(Self::from_point(vertices[0]), |bbox, &v| {
                bbox.expand_to_include(v)
            })
    }
}

impl From<&Circle> for BoundingBox {
    fn from(circle: &Circle) -> Self {
        let (c, r) = (circle.center(), circle.radius());
        Self {
            min: Point::from_non_negative(c.x() - r, c.y() - r),
            max: Point::from_non_negative(c.x() + r, c.y() + r),
        }
    }
}

impl From<&Shape> for BoundingBox {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Circle(circle) => circle.into(),
            Shape::Polygon(polygon) => polygon.into(),
        }
    }
}
