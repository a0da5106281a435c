//! Tolerant scalar comparisons.

use num_traits::Float;

/// The fixed tolerance below which two quantities are treated as equal.
pub const EPSILON: f64 = 1e-9;

/// Returns `true` if `|a - b| < eps`.
#[inline]
pub fn eq_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() < eps
}

/// Returns `true` if `a` is greater than, or within `eps` below, `b`.
#[inline]
pub fn ge_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    a > b - eps
}

/// Returns `true` if `a` is less than, or within `eps` above, `b`.
#[inline]
pub fn le_eps<F: Float>(a: F, b: F, eps: F) -> bool {
    a < b + eps
}

/// Tolerant equality with [`EPSILON`].
///
/// ```
/// use planum::tolerance::{eq, EPSILON};
///
/// assert!(eq(7.0, 7.0 + 0.9 * EPSILON));
/// assert!(!eq(0.0, EPSILON));
/// ```
#[inline]
pub fn eq(a: f64, b: f64) -> bool {
    eq_eps(a, b, EPSILON)
}

/// Tolerant `a >= b` with [`EPSILON`].
#[inline]
pub fn ge(a: f64, b: f64) -> bool {
    ge_eps(a, b, EPSILON)
}

/// Tolerant `a <= b` with [`EPSILON`].
#[inline]
pub fn le(a: f64, b: f64) -> bool {
    le_eps(a, b, EPSILON)
}

/// Returns `true` if `a` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(a: f64) -> bool {
    eq(a, 0.0)
}
