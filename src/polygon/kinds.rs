//! Polygon kinds: rectangles, squares and triangles.
//!
//! Each kind wraps a validated [`Polygon`] and is only obtainable through a
//! constructor that checks the kind's extra constraints, so holding a
//! `Square` proves the ring is a square.

use super::Polygon;
use crate::error::{GeometryError, ParseError};
use crate::io::text;
use crate::log::debug;
use crate::primitives::Point;
use crate::tolerance;
use std::fmt;
use std::str::FromStr;

/// A polygon with extra shape constraints.
///
/// Implementors get the whole [`GeometricShape`](crate::GeometricShape)
/// surface, with transformations re-checking the kind's constraints on the
/// result.
pub trait PolygonKind: Sized {
    /// The underlying polygon.
    fn polygon(&self) -> &Polygon;

    /// Checks the kind's constraints on `polygon`.
    fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError>;

    /// Gives up the kind, keeping the polygon.
    fn into_polygon(self) -> Polygon;
}

impl PolygonKind for Polygon {
    #[inline]
    fn polygon(&self) -> &Polygon {
        self
    }

    #[inline]
    fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        Ok(polygon)
    }

    #[inline]
    fn into_polygon(self) -> Polygon {
        self
    }
}

fn check_side_count(
    polygon: &Polygon,
    kind: &'static str,
    expected: usize,
) -> Result<(), GeometryError> {
    let found = polygon.num_sides();
    if found != expected {
        debug!(kind, expected, found, "rejecting polygon kind: wrong side count");
        return Err(GeometryError::WrongSideCount {
            kind,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_right_angles(polygon: &Polygon) -> Result<(), GeometryError> {
    let sides = polygon.sides();
    let square_corner = |i: usize, j: usize| sides[i].line().is_perpendicular(sides[j].line());
    // The fourth angle follows from the other three
    if !(square_corner(0, 1) && square_corner(0, 3) && square_corner(1, 2)) {
        debug!("rejecting rectangle: angle is not a right angle");
        return Err(GeometryError::NotRectangular);
    }
    Ok(())
}

fn check_equal_sides(polygon: &Polygon) -> Result<(), GeometryError> {
    let sides = polygon.sides();
    let first = sides[0].length();
    if !sides[1..].iter().all(|side| tolerance::eq(side.length(), first)) {
        debug!("rejecting square: sides differ in length");
        return Err(GeometryError::UnequalSides);
    }
    Ok(())
}

macro_rules! polygon_kind_conversions {
    ($kind:ident, $label:literal, $arity:literal) => {
        impl TryFrom<Polygon> for $kind {
            type Error = GeometryError;

            fn try_from(polygon: Polygon) -> Result<Self, Self::Error> {
                Self::from_polygon(polygon)
            }
        }

        impl From<$kind> for Polygon {
            #[inline]
            fn from(kind: $kind) -> Self {
                kind.into_polygon()
            }
        }

        impl AsRef<Polygon> for $kind {
            #[inline]
            fn as_ref(&self) -> &Polygon {
                self.polygon()
            }
        }

        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!($label, ": {}"),
                    text::format_points(self.polygon().vertices())
                )
            }
        }

        #[doc = concat!("Parses exactly ", stringify!($arity), " points, `\"x0 y0 x1 y1 ...\"`, without a leading count.")]
        impl FromStr for $kind {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let vertices = Point::parse_list_exact(s, $arity)?;
                Ok(Self::new(&vertices)?)
            }
        }
    };
}

/// A four-sided polygon with right angles.
///
/// # Example
///
/// ```
/// use planum::{GeometricShape, Point, Rectangle};
/// use std::f64::consts::FRAC_PI_2;
///
/// let p = |x, y| Point::new(x, y).unwrap();
/// let r = Rectangle::new(&[p(1.0, 1.0), p(3.0, 1.0), p(3.0, 5.0), p(1.0, 5.0)]).unwrap();
/// let turned = r.rotate_about_centroid(FRAC_PI_2).unwrap();
/// assert_eq!(turned, Rectangle::new(&[p(4.0, 2.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 2.0)]).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Polygon", try_from = "Polygon")
)]
pub struct Rectangle(Polygon);

impl Rectangle {
    /// Creates a rectangle from its four corners, in ring order.
    pub fn new(vertices: &[Point]) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(vertices)?)
    }

    /// Creates the axis-aligned rectangle with opposite corners `a` and `b`.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, GeometryError> {
        let corners = [
            a,
            Point::from_non_negative(a.x(), b.y()),
            b,
            Point::from_non_negative(b.x(), a.y()),
        ];
        Self::new(&corners)
    }
}

impl PolygonKind for Rectangle {
    #[inline]
    fn polygon(&self) -> &Polygon {
        &self.0
    }

    fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        check_side_count(&polygon, "rectangle", 4)?;
        check_right_angles(&polygon)?;
        Ok(Self(polygon))
    }

    #[inline]
    fn into_polygon(self) -> Polygon {
        self.0
    }
}

polygon_kind_conversions!(Rectangle, "Retangulo", 4);

/// A rectangle with four equal sides.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Polygon", try_from = "Polygon")
)]
pub struct Square(Rectangle);

impl Square {
    /// Creates a square from its four corners, in ring order.
    pub fn new(vertices: &[Point]) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(vertices)?)
    }

    /// The square as a plain rectangle.
    #[inline]
    pub fn rectangle(&self) -> &Rectangle {
        &self.0
    }
}

impl PolygonKind for Square {
    #[inline]
    fn polygon(&self) -> &Polygon {
        self.0.polygon()
    }

    fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        check_side_count(&polygon, "square", 4)?;
        let rectangle = Rectangle::from_polygon(polygon)?;
        check_equal_sides(rectangle.polygon())?;
        Ok(Self(rectangle))
    }

    #[inline]
    fn into_polygon(self) -> Polygon {
        self.0.into_polygon()
    }
}

impl From<Square> for Rectangle {
    #[inline]
    fn from(square: Square) -> Self {
        square.0
    }
}

polygon_kind_conversions!(Square, "Quadrado", 4);

/// A three-sided polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "Polygon", try_from = "Polygon")
)]
pub struct Triangle(Polygon);

impl Triangle {
    /// Creates a triangle from its three vertices.
    pub fn new(vertices: &[Point]) -> Result<Self, GeometryError> {
        Self::from_polygon(Polygon::new(vertices)?)
    }
}

impl PolygonKind for Triangle {
    #[inline]
    fn polygon(&self) -> &Polygon {
        &self.0
    }

    fn from_polygon(polygon: Polygon) -> Result<Self, GeometryError> {
        check_side_count(&polygon, "triangle", 3)?;
        Ok(Self(polygon))
    }

    #[inline]
    fn into_polygon(self) -> Polygon {
        self.0
    }
}

polygon_kind_conversions!(Triangle, "Triangulo", 3);
