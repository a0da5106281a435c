//! Bresenham rasterization of segments onto the integer grid.
//!
//! The midpoint loop only walks the first octant (`0 <= dy <= dx`, stepping
//! right). Every other direction is reduced to it by picking the endpoint to
//! start from, swapping the axes for steep segments and stepping the minor
//! axis downward where the segment descends.

use super::{NaturalPoint, Point};
use crate::log::trace;

/// One reduced walk: start on the major axis at `major`, minor axis at `minor`.
#[derive(Debug, Clone, Copy)]
struct Walk {
    major: i64,
    minor: i64,
    d_major: i64,
    d_minor: i64,
    steep: bool,
    descending: bool,
}

/// Rasterizes the segment `from`-`to` after rounding both endpoints.
pub(crate) fn rasterize_segment(from: Point, to: Point) -> Vec<NaturalPoint> {
    let (x0, y0) = (from.x().round() as i64, from.y().round() as i64);
    let (x1, y1) = (to.x().round() as i64, to.y().round() as i64);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let len = dx.max(dy) + 1;

    let rightward = x1 > x0;
    let upward = y1 >= y0;
    let steep = dy >= dx;

    let walk = match (rightward, upward, steep) {
        (true, true, false) => Walk::flat(x0, y0, dx, dy, false),
        (true, true, true) => Walk::steep(y0, x0, dy, dx, false),
        (false, true, true) => Walk::steep(y0, x0, dy, dx, true),
        (false, true, false) => Walk::flat(x1, y1, dx, dy, true),
        (false, false, false) => Walk::flat(x1, y1, dx, dy, false),
        (false, false, true) => Walk::steep(y1, x1, dy, dx, false),
        (true, false, true) => Walk::steep(y1, x1, dy, dx, true),
        (true, false, false) => Walk::flat(x0, y0, dx, dy, true),
    };
    trace!(
        "rasterizing ({x0},{y0})-({x1},{y1}): {len} cells, steep={}, descending={}",
        walk.steep,
        walk.descending
    );

    walk.run(len)
}

impl Walk {
    fn flat(major: i64, minor: i64, d_major: i64, d_minor: i64, descending: bool) -> Self {
        Self {
            major,
            minor,
            d_major,
            d_minor,
            steep: false,
            descending,
        }
    }

    fn steep(major: i64, minor: i64, d_major: i64, d_minor: i64, descending: bool) -> Self {
        Self {
            steep: true,
            ..Self::flat(major, minor, d_major, d_minor, descending)
        }
    }

    fn run(self, len: i64) -> Vec<NaturalPoint> {
        let step = if self.descending { -1 } else { 1 };
        let (mut major, mut minor) = (self.major, self.minor);
        let mut decision = 2 * self.d_minor - self.d_major;

        let mut cells = Vec::with_capacity(len as usize);
        for _ in 0..len {
            cells.push(if self.steep {
                NaturalPoint::from_raster(minor, major)
            } else {
                NaturalPoint::from_raster(major, minor)
            });
            major += 1;
            if decision < 0 {
                decision += 2 * self.d_minor;
            } else {
                decision += 2 * self.d_minor - 2 * self.d_major;
                minor += step;
            }
        }
        cells
    }
}
