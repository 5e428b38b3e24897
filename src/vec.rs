//! Planar vector math for the blob force models.
//!
//! Only the handful of primitives the springs and the shear force need:
//! dot, the z component of the cross product, normalisation and a fixed
//! 90 degree rotation.

use crate::float::Float;
use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// 2D vector. Bodies live in the plane z = 0.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Unit vector at `angle` radians counter-clockwise from +x.
    pub fn from_angle(angle: F) -> Self {
        Vec2 { x: angle.cos(), y: angle.sin() }
    }

    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3D cross product of the two vectors embedded at z = 0.
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Rotated 90 degrees counter-clockwise.
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Rotated `angle` radians counter-clockwise.
    pub fn rotate(self, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Vec2 {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction. Returns zero if length is near zero.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(F::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}
