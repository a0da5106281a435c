//! 2D displacement vector.

use super::VirtualPoint;
use crate::tolerance;
use std::ops::Neg;

/// A displacement with its length from the origin cached at construction.
///
/// Equality is the tolerant equality of the components.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "VirtualPoint", from = "VirtualPoint")
)]
pub struct Vector {
    delta: VirtualPoint,
    length: f64,
}

impl Vector {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::from(VirtualPoint::new(x, y))
    }

    /// Creates the vector that moves `from` onto `to`.
    #[inline]
    pub fn between(from: impl Into<VirtualPoint>, to: impl Into<VirtualPoint>) -> Self {
        to.into() - from.into()
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The x component.
    #[inline]
    pub fn x(self) -> f64 {
        self.delta.x()
    }

    /// The y component.
    #[inline]
    pub fn y(self) -> f64 {
        self.delta.y()
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.length
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Returns `true` if the two vectors form a right angle.
    #[inline]
    pub fn is_perpendicular(self, other: Self) -> bool {
        tolerance::is_zero(self.dot(other))
    }
}

impl From<VirtualPoint> for Vector {
    fn from(delta: VirtualPoint) -> Self {
        Self {
            delta,
            length: delta.dist(VirtualPoint::origin()),
        }
    }
}

impl From<Vector> for VirtualPoint {
    #[inline]
    fn from(v: Vector) -> Self {
        v.delta
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.delta == other.delta
    }
}

impl Neg for Vector {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}
