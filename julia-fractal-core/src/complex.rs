use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A complex number represented as two `f64` components.
///
/// `Copy` and free of heap data so the escape loop stays in registers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns `√(re² + im²)`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Complex conjugate: reflection across the real axis.
    #[inline]
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// `true` when neither component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// `true` when the imaginary part is exactly zero.
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == 0.0
    }
}

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn multiplication() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let c = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert!(approx_eq(c.re, -5.0));
        assert!(approx_eq(c.im, 10.0));
    }

    #[test]
    fn squaring_plus_constant() {
        // (1 + i)² + (-1 + 0i) = 2i - 1
        let z = Complex::new(1.0, 1.0);
        let next = z * z + Complex::new(-1.0, 0.0);
        assert!(approx_eq(next.re, -1.0));
        assert!(approx_eq(next.im, 2.0));
    }

    #[test]
    fn norms() {
        let a = Complex::new(3.0, 4.0);
        assert!(approx_eq(a.norm_sq(), 25.0));
        assert!(approx_eq(a.norm(), 5.0));
    }

    #[test]
    fn conjugate_square_is_mirrored() {
        let z = Complex::new(0.3, -0.7);
        let sq = z * z;
        let sq_conj = z.conj() * z.conj();
        assert_eq!(sq.conj(), sq_conj);
    }

    #[test]
    fn finiteness() {
        assert!(Complex::new(-0.74543, 0.11301).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn display_handles_sign() {
        assert_eq!(Complex::new(-1.0, 0.5).to_string(), "-1 + 0.5i");
        assert_eq!(Complex::new(0.25, -2.0).to_string(), "0.25 - 2i");
    }

    #[test]
    fn sub_and_neg() {
        let d = Complex::new(5.0, 3.0) - Complex::new(2.0, 1.0);
        assert_eq!(d, Complex::new(3.0, 2.0));
        assert_eq!(-d, Complex::new(-3.0, -2.0));
    }
}
