//! Error types for planum operations.

use thiserror::Error;

/// A geometric validation failure.
///
/// Raised by every constructor or transformation that would produce a value
/// violating one of the kernel's invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A `Point` would land outside the first quadrant.
    #[error("point ({x}, {y}) has a negative coordinate")]
    NegativeCoordinate {
        /// The rejected x coordinate.
        x: f64,
        /// The rejected y coordinate.
        y: f64,
    },

    /// A `NaturalPoint` was requested from a point with a fractional coordinate.
    #[error("point ({x}, {y}) does not have integer coordinates")]
    NotIntegral {
        /// The rejected x coordinate.
        x: f64,
        /// The rejected y coordinate.
        y: f64,
    },

    /// Both coefficients of a line equation are zero.
    #[error("a line cannot have both coefficients equal to zero")]
    DegenerateLine,

    /// A line or segment was built from two equal points.
    #[error("cannot build a line through two equal points")]
    CoincidentPoints,

    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// A vertex lies on the line of the side two steps behind it.
    #[error("polygon vertex {index} is collinear with side {side}")]
    CollinearVertex {
        /// Index of the offending vertex.
        index: usize,
        /// Index of the side whose line contains it.
        side: usize,
    },

    /// Two non-adjacent sides of a polygon cross each other.
    #[error("polygon sides {first} and {second} intersect")]
    SelfIntersection {
        /// Index of the first side.
        first: usize,
        /// Index of the second side.
        second: usize,
    },

    /// A polygon kind was built from the wrong number of vertices.
    #[error("a {kind} must have exactly {expected} sides, got {found}")]
    WrongSideCount {
        /// Name of the polygon kind.
        kind: &'static str,
        /// Required number of sides.
        expected: usize,
        /// Number of sides supplied.
        found: usize,
    },

    /// A rectangle's inner angles are not all right angles.
    #[error("a rectangle's inner angles must all be right angles")]
    NotRectangular,

    /// A square's sides do not all have the same length.
    #[error("a square must have all sides of the same length")]
    UnequalSides,

    /// A circle radius is zero, negative or NaN.
    #[error("circle radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The rejected radius.
        radius: f64,
    },

    /// A circle would extend into negative coordinates.
    #[error("circle of radius {radius} centered at ({x}, {y}) extends into negative coordinates")]
    CircleOutOfBounds {
        /// Center x coordinate.
        x: f64,
        /// Center y coordinate.
        y: f64,
        /// The rejected radius.
        radius: f64,
    },

    /// A bounding box was requested for an empty point set.
    #[error("cannot bound an empty set of points")]
    EmptyPointSet,

    /// A path needs at least two points.
    #[error("a path needs at least 2 points, got {count}")]
    TooFewPathPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A polygon equal to one already collected was added to a unique set.
    #[error("polygon is a duplicate of the one at index {index}")]
    DuplicatePolygon {
        /// Index of the polygon already in the collection.
        index: usize,
    },
}

/// Malformed textual input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The input has fewer tokens than the smallest valid encoding.
    #[error("expected a point count followed by coordinates, got {tokens} token(s)")]
    TooShort {
        /// Number of tokens found.
        tokens: usize,
    },

    /// The leading point count is not a non-negative integer.
    #[error("invalid point count {token:?}")]
    InvalidCount {
        /// The offending token.
        token: String,
    },

    /// A coordinate token is not a number.
    #[error("invalid coordinate {token:?} at token {position}")]
    InvalidCoordinate {
        /// Zero-based token position in the input.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// The number of coordinates does not match the declared point count.
    #[error("expected {expected} coordinates, got {found}")]
    CoordinateCount {
        /// Coordinates implied by the point count.
        expected: usize,
        /// Coordinates present.
        found: usize,
    },

    /// The tokens are well formed but describe an invalid shape.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
