//! Simple-polygon validation.
//!
//! A vertex ring is accepted when it has at least three vertices, no two
//! consecutive vertices coincide, no vertex folds back onto the line of the
//! side two steps behind it, and no two non-adjacent sides cross.

use crate::error::GeometryError;
use crate::log::debug;
use crate::primitives::{LineSegment, Point};

/// Builds the sides of the ring `vertices`, side `i` joining vertex `i` to
/// vertex `i + 1` (wrapping around).
pub(crate) fn build_sides(vertices: &[Point]) -> Result<Vec<LineSegment>, GeometryError> {
    let n = vertices.len();
    if n < 3 {
        debug!(count = n, "rejecting polygon: too few vertices");
        return Err(GeometryError::TooFewVertices { count: n });
    }
    (0..n)
        .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|_| {
            debug!("rejecting polygon: consecutive vertices coincide");
        })
}

/// Checks the ring formed by `vertices` and its `sides`.
pub(crate) fn validate(vertices: &[Point], sides: &[LineSegment]) -> Result<(), GeometryError> {
    if let Some((index, side)) = find_collinear_vertex(vertices, sides) {
        debug!(index, side, "rejecting polygon: collinear vertex");
        return Err(GeometryError::CollinearVertex { index, side });
    }
    if let Some((first, second)) = find_self_intersection(sides) {
        debug!(first, second, "rejecting polygon: sides intersect");
        return Err(GeometryError::SelfIntersection { first, second });
    }
    Ok(())
}

/// Finds a vertex lying on the line of the side two steps behind it.
///
/// Returns `(vertex index, side index)`.
fn find_collinear_vertex(
    vertices: &[Point],
    sides: &[LineSegment],
) -> Option<(usize, usize)> {
    let n = vertices.len();
    (0..n)
        .map(|i| ((i + 2) % n, i))
        .find(|&(v, i)| sides[i].line().is_collinear(vertices[v]))
}

/// Finds the first pair of non-adjacent sides that cross.
///
/// Sides sharing a vertex are skipped, so with three sides there is nothing
/// to check.
fn find_self_intersection(sides: &[LineSegment]) -> Option<(usize, usize)> {
    let n = sides.len();

    for i in 0..n {
        // Check against non-adjacent sides
        for j in (i + 2)..n {
            // Skip the closing side, which shares vertex 0 with side 0
            if (j + 1) % n == i {
                continue;
            }
            if sides[i].intersects(&sides[j]) {
                return Some((i, j));
            }
        }
    }

    None
}
