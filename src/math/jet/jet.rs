use std::ops::{
    Add,
    Div,
    Mul,
    Neg,
    Sub
};

use crate::math::complex::complex::Complex;
use crate::math::jet::scalar::Scalar;

// ─────────────────────────────────────────────────────────────────────────────
// Jet
// ─────────────────────────────────────────────────────────────────────────────
//
// 一階 jet（dual number）：(value, diff) 代表函數值與在參數點的導數。
//
//   (f, f') + (g, g') = (f + g, f' + g')
//   (f, f') · (g, g') = (f·g, f'·g + f·g')
//   (f, f') / (g, g') = (f/g, (f'·g - g'·f) / g²)
//
// 常數的 diff 為 T::ZERO。

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jet<T> {
    pub value: T,
    pub diff: T,
}

impl<T: Scalar> Jet<T> {
    #[inline]
    pub fn new(value: T, diff: T) -> Jet<T> {
        Jet { value, diff }
    }

    #[inline]
    pub fn constant(value: T) -> Jet<T> {
        Jet { value, diff: T::ZERO }
    }

    /// 自變數本身：diff = 1
    #[inline]
    pub fn variable(value: T) -> Jet<T> {
        Jet { value, diff: T::ONE }
    }

    pub fn zero() -> Jet<T> {
        Jet::constant(T::ZERO)
    }

    pub fn one() -> Jet<T> {
        Jet::constant(T::ONE)
    }

    pub fn recip(self) -> Jet<T> {
        Jet {
            value: self.value.recip(),
            diff: -self.diff / (self.value * self.value),
        }
    }

    pub fn square(self) -> Jet<T> {
        self * self
    }

    pub fn exp(self) -> Jet<T> {
        let y = self.value.exp();
        Jet { value: y, diff: y * self.diff }
    }

    pub fn ln(self) -> Jet<T> {
        Jet {
            value: self.value.ln(),
            diff: self.diff / self.value,
        }
    }

    pub fn sqrt(self) -> Jet<T> {
        let y = self.value.sqrt();
        Jet {
            value: y,
            diff: self.diff / y.scale(2.0),
        }
    }

    pub fn cos(self) -> Jet<T> {
        Jet {
            value: self.value.cos(),
            diff: -self.value.sin() * self.diff,
        }
    }

    pub fn sin(self) -> Jet<T> {
        Jet {
            value: self.value.sin(),
            diff: self.value.cos() * self.diff,
        }
    }

    pub fn tan(self) -> Jet<T> {
        let c = self.value.cos();
        Jet {
            value: self.value.tan(),
            diff: self.diff / (c * c),
        }
    }

    /// square-and-multiply，每一步都經過 jet 乘法（product rule）。
    pub fn powi(self, n: i32) -> Jet<T> {
        if n < 0 {
            return self.powi_unsigned(n.unsigned_abs()).recip();
        }
        self.powi_unsigned(n as u32)
    }

    fn powi_unsigned(self, mut n: u32) -> Jet<T> {
        let mut w = Jet::one();
        let mut z = self;
        while n != 0 {
            if n & 1 == 1 {
                w = w * z;
            }
            z = z.square();
            n >>= 1;
        }
        w
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 運算子
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Scalar> Add for Jet<T> {
    type Output = Jet<T>;
    #[inline]
    fn add(self, rhs: Jet<T>) -> Jet<T> {
        Jet { value: self.value + rhs.value, diff: self.diff + rhs.diff }
    }
}

impl<T: Scalar> Sub for Jet<T> {
    type Output = Jet<T>;
    #[inline]
    fn sub(self, rhs: Jet<T>) -> Jet<T> {
        Jet { value: self.value - rhs.value, diff: self.diff - rhs.diff }
    }
}

impl<T: Scalar> Neg for Jet<T> {
    type Output = Jet<T>;
    #[inline]
    fn neg(self) -> Jet<T> {
        Jet { value: -self.value, diff: -self.diff }
    }
}

impl<T: Scalar> Mul for Jet<T> {
    type Output = Jet<T>;
    #[inline]
    fn mul(self, rhs: Jet<T>) -> Jet<T> {
        Jet {
            value: self.value * rhs.value,
            diff: self.value * rhs.diff + rhs.value * self.diff,
        }
    }
}

/// 商法則。
///
/// 兩個 value 都精確等於 0 時以一階 L'Hôpital 取代：value = x'/y'，
/// diff 標為 NaN。這只在一階意義下成立，且不檢查極限是否存在或有限；
/// 已知閉式極限的函數應自行處理該點（見 `z/(e^z-1)`、`z/sin(z)`）。
impl<T: Scalar> Div for Jet<T> {
    type Output = Jet<T>;
    fn div(self, rhs: Jet<T>) -> Jet<T> {
        if self.value == T::ZERO && rhs.value == T::ZERO {
            Jet { value: self.diff / rhs.diff, diff: T::NAN }
        } else {
            Jet {
                value: self.value / rhs.value,
                diff: (self.diff * rhs.value - rhs.diff * self.value) / (rhs.value * rhs.value),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 實數 jet 與複數 jet 之間
// ─────────────────────────────────────────────────────────────────────────────

impl Jet<Complex> {
    /// e^z - 1
    pub fn exp_m1(self) -> Jet<Complex> {
        Jet {
            value: self.value.exp_m1(),
            diff: self.value.exp() * self.diff,
        }
    }

    pub fn from_real(x: Jet<f64>) -> Jet<Complex> {
        Jet {
            value: Complex::from_real(x.value),
            diff: Complex::from_real(x.diff),
        }
    }

    pub fn real_part(self) -> Jet<f64> {
        Jet { value: self.value.x, diff: self.diff.x }
    }

    pub fn imag_part(self) -> Jet<f64> {
        Jet { value: self.value.y, diff: self.diff.y }
    }

    pub fn conj(self) -> Jet<Complex> {
        Jet { value: self.value.conj(), diff: self.diff.conj() }
    }

    /// 實數 jet 乘上複數 jet：(a, a')·(z, z') = (a·z, a·z' + a'·z)
    #[inline]
    pub fn scale(self, a: Jet<f64>) -> Jet<Complex> {
        Jet {
            value: self.value.mul_real(a.value),
            diff: Complex::linear_combination2(a.value, self.diff, a.diff, self.value),
        }
    }

    /// a·z + b·w，權重為實數 jet。
    pub fn linear_combination2(
        a: Jet<f64>,
        z: Jet<Complex>,
        b: Jet<f64>,
        w: Jet<Complex>,
    ) -> Jet<Complex> {
        Jet {
            value: Complex::linear_combination2(a.value, z.value, b.value, w.value),
            diff: Complex::linear_combination2(a.value, z.diff, b.value, w.diff)
                + Complex::linear_combination2(a.diff, z.value, b.diff, w.value),
        }
    }

    pub fn linear_combination3(
        a0: Jet<f64>,
        z0: Jet<Complex>,
        a1: Jet<f64>,
        z1: Jet<Complex>,
        a2: Jet<f64>,
        z2: Jet<Complex>,
    ) -> Jet<Complex> {
        Jet {
            value: Complex::linear_combination3(
                a0.value, z0.value, a1.value, z1.value, a2.value, z2.value,
            ),
            diff: Complex::linear_combination3(
                a0.value, z0.diff, a1.value, z1.diff, a2.value, z2.diff,
            ) + Complex::linear_combination3(
                a0.diff, z0.value, a1.diff, z1.value, a2.diff, z2.value,
            ),
        }
    }
}
