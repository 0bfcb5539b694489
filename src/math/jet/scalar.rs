use std::ops::{
    Add,
    Div,
    Mul,
    Neg,
    Sub
};

use crate::math::complex::complex::Complex;

/// 可放進 [`Jet`](crate::math::jet::jet::Jet) 的純量：實數 `f64` 與 [`Complex`]。
///
/// 各超越函數皆為對應的「純值」版本，jet 版本由 chain rule 組合而成。
pub trait Scalar:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const NAN: Self;

    fn from_f64(a: f64) -> Self;

    fn scale(self, a: f64) -> Self;

    fn recip(self) -> Self;

    fn exp(self) -> Self;

    fn ln(self) -> Self;

    fn sqrt(self) -> Self;

    fn cos(self) -> Self;

    fn sin(self) -> Self;

    fn tan(self) -> Self;

    fn powi(self, n: i32) -> Self;
}

impl Scalar for f64 {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
    const NAN: f64 = f64::NAN;

    #[inline]
    fn from_f64(a: f64) -> f64 {
        a
    }

    #[inline]
    fn scale(self, a: f64) -> f64 {
        a * self
    }

    #[inline]
    fn recip(self) -> f64 {
        f64::recip(self)
    }

    #[inline]
    fn exp(self) -> f64 {
        f64::exp(self)
    }

    #[inline]
    fn ln(self) -> f64 {
        f64::ln(self)
    }

    #[inline]
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }

    #[inline]
    fn cos(self) -> f64 {
        f64::cos(self)
    }

    #[inline]
    fn sin(self) -> f64 {
        f64::sin(self)
    }

    #[inline]
    fn tan(self) -> f64 {
        f64::tan(self)
    }

    #[inline]
    fn powi(self, n: i32) -> f64 {
        f64::powi(self, n)
    }
}

impl Scalar for Complex {
    const ZERO: Complex = Complex::ZERO;
    const ONE: Complex = Complex::ONE;
    const NAN: Complex = Complex::NAN;

    #[inline]
    fn from_f64(a: f64) -> Complex {
        Complex::from_real(a)
    }

    #[inline]
    fn scale(self, a: f64) -> Complex {
        self.mul_real(a)
    }

    #[inline]
    fn recip(self) -> Complex {
        Complex::recip(self)
    }

    #[inline]
    fn exp(self) -> Complex {
        Complex::exp(self)
    }

    #[inline]
    fn ln(self) -> Complex {
        Complex::ln(self)
    }

    #[inline]
    fn sqrt(self) -> Complex {
        Complex::sqrt(self)
    }

    #[inline]
    fn cos(self) -> Complex {
        Complex::cos(self)
    }

    #[inline]
    fn sin(self) -> Complex {
        Complex::sin(self)
    }

    #[inline]
    fn tan(self) -> Complex {
        Complex::tan(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Complex {
        Complex::powi(self, n)
    }
}
