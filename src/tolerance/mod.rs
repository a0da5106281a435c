//! Epsilon-aware scalar comparisons.
//!
//! Every geometric predicate in the crate routes through these functions
//! instead of raw `==`, `<` or `>`, absorbing the floating-point error that
//! rotation and intersection arithmetic introduce.
//!
//! The `*_eps` variants take an explicit tolerance and are generic over the
//! float type; the short forms use the fixed [`EPSILON`].

mod predicates;

pub use predicates::{eq, eq_eps, ge, ge_eps, is_zero, le, le_eps, EPSILON};
