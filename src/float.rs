//! Floating-point abstraction so the cloth runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Floating-point operations needed by the integrator and solver.
///
/// Implemented for `f32` and `f64`. Square roots go through `libm` so the
/// crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;
    /// Convert from f64 (for constants and configuration).
    fn from_f64(v: f64) -> Self;
    /// Convert a grid coordinate.
    fn from_usize(v: usize) -> Self;

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Inclusive range check, `false` for NaN.
    fn in_unit_interval(self) -> bool {
        self >= Self::zero() && self <= Self::one()
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
    fn from_usize(v: usize) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(v: f64) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_interval_rejects_nan() {
        assert!(!f32::NAN.in_unit_interval());
        assert!(0.9f64.in_unit_interval());
        assert!(!1.5f32.in_unit_interval());
    }

    #[test]
    fn from_f64_is_exact_for_f64() {
        assert_eq!(<f64 as Float>::from_f64(0.2), 0.2);
        assert_eq!(<f32 as Float>::from_f64(0.2), 0.2f32);
    }

    #[test]
    fn sqrt_matches_std() {
        assert!((Float::sqrt(2.0f64) - core::f64::consts::SQRT_2).abs() < 1e-15);
    }
}
