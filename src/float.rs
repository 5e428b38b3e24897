//! Floating-point abstraction so blobs can be simulated in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations the force models need.
///
/// Implemented for `f32` and `f64`. Transcendental functions go through
/// `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert a count or index. Exact for every ring size a blob can hold.
    fn from_usize(v: usize) -> Self;

    /// Degrees to radians.
    fn to_radians(self) -> Self {
        self * Self::pi() / Self::from_f32(180.0)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_to_radians() {
        assert!((Float::to_radians(90.0f64) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((Float::to_radians(360.0f32) - 2.0 * core::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn finiteness() {
        assert!(Float::is_finite(1.0f32));
        assert!(!Float::is_finite(f32::NAN));
        assert!(!Float::is_finite(f64::INFINITY));
    }
}
