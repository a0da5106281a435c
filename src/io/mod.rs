//! Text encodings for geometric data.
//!
//! Provides parsing of whitespace-separated point lists and the bracketed
//! display form used by every shape's `Display` implementation.

pub(crate) mod text;

pub use text::{format_points, parse_points, parse_points_exact};
