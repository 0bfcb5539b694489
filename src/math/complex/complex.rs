use std::fmt;
use std::ops::{
    Add,
    Div,
    Mul,
    Neg,
    Sub
};

use serde::{
    Deserialize,
    Serialize
};

// ─────────────────────────────────────────────────────────────────────────────
// Complex
// ─────────────────────────────────────────────────────────────────────────────
//
// x + iy，純值型別（Copy），不持有任何共享狀態。
//
// 相等比較為逐分量的精確比較（含 NaN 傳遞：NaN != NaN），
// 只用於奇異點判斷與捷徑分支，不做容差比較。

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub x: f64,
    pub y: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { x: 0.0, y: 0.0 };
    pub const ONE: Complex = Complex { x: 1.0, y: 0.0 };
    pub const MINUS_ONE: Complex = Complex { x: -1.0, y: 0.0 };
    pub const I: Complex = Complex { x: 0.0, y: 1.0 };
    pub const MINUS_I: Complex = Complex { x: 0.0, y: -1.0 };
    pub const NAN: Complex = Complex { x: f64::NAN, y: f64::NAN };
    /// Returned by [`Complex::div`] when the divisor has zero magnitude.
    pub const INFINITY: Complex = Complex { x: f64::INFINITY, y: f64::INFINITY };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Complex {
        Complex { x, y }
    }

    #[inline]
    pub const fn from_real(x: f64) -> Complex {
        Complex { x, y: 0.0 }
    }

    #[inline]
    pub const fn from_imag(y: f64) -> Complex {
        Complex { x: 0.0, y }
    }

    /// z + i·w
    #[inline]
    pub fn from_c(z: Complex, w: Complex) -> Complex {
        Complex { x: z.x - w.y, y: z.y + w.x }
    }

    #[inline]
    pub fn real_part(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn imag_part(self) -> f64 {
        self.y
    }

    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// |z|，以 hypot 計算避免平方時的 overflow / underflow。
    #[inline]
    pub fn abs(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance(self, other: Complex) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Principal argument in (-π, π].
    #[inline]
    pub fn arg(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn conj(self) -> Complex {
        Complex { x: self.x, y: -self.y }
    }

    #[inline]
    pub fn square(self) -> Complex {
        Complex {
            x: self.x * self.x - self.y * self.y,
            y: 2.0 * self.x * self.y,
        }
    }

    pub fn recip(self) -> Complex {
        Complex::ONE.div(self)
    }

    /// -1/z
    pub fn negate_recip(self) -> Complex {
        Complex::MINUS_ONE.div(self)
    }

    /// a·z
    #[inline]
    pub fn mul_real(self, a: f64) -> Complex {
        Complex { x: a * self.x, y: a * self.y }
    }

    /// (bi)·z
    #[inline]
    pub fn mul_imag(self, b: f64) -> Complex {
        Complex { x: -b * self.y, y: b * self.x }
    }

    /// a·z + b·w
    #[inline]
    pub fn linear_combination2(a: f64, z: Complex, b: f64, w: Complex) -> Complex {
        Complex {
            x: a * z.x + b * w.x,
            y: a * z.y + b * w.y,
        }
    }

    /// a0·z0 + a1·z1 + a2·z2
    #[inline]
    pub fn linear_combination3(
        a0: f64,
        z0: Complex,
        a1: f64,
        z1: Complex,
        a2: f64,
        z2: Complex,
    ) -> Complex {
        Complex {
            x: a0 * z0.x + a1 * z1.x + a2 * z2.x,
            y: a0 * z0.y + a1 * z1.y + a2 * z2.y,
        }
    }

    /// 除法（Smith 演算法：先以較大的分量縮放，避免 |w|² 溢位或下溢）。
    ///
    /// 除數為 0 且被除數非零時回傳 [`Complex::INFINITY`]，0/0 為 NaN。
    pub fn div(self, other: Complex) -> Complex {
        if other.x == 0.0 && other.y == 0.0 {
            return if self.x != 0.0 || self.y != 0.0 {
                Complex::INFINITY
            } else {
                Complex::NAN
            };
        }
        if other.x.abs() >= other.y.abs() {
            let r = other.y / other.x;
            let d = other.x + other.y * r;
            Complex {
                x: (self.x + self.y * r) / d,
                y: (self.y - self.x * r) / d,
            }
        } else {
            let r = other.x / other.y;
            let d = other.x * r + other.y;
            Complex {
                x: (self.x * r + self.y) / d,
                y: (self.y * r - self.x) / d,
            }
        }
    }

    /// Re(z·conj(w))，把 z、w 當成平面向量的內積。
    #[inline]
    pub fn inner_product(self, other: Complex) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn normalize(self) -> Complex {
        self.mul_real(1.0 / self.abs())
    }

    /// Σ_{k=start}^{end} f(k)，含兩端。
    pub fn sum<F>(mut f: F, start: i64, end: i64) -> Complex
    where
        F: FnMut(i64) -> Complex,
    {
        let mut x = 0.0;
        let mut y = 0.0;
        for k in start..=end {
            let v = f(k);
            x += v.x;
            y += v.y;
        }
        Complex { x, y }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 運算子
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            x: self.x * rhs.x - self.y * rhs.y,
            y: self.x * rhs.y + self.y * rhs.x,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        self.mul_real(rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        Complex::div(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex { x: -self.x, y: -self.y }
    }
}

impl From<f64> for Complex {
    fn from(x: f64) -> Complex {
        Complex::from_real(x)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// 呈現層使用的文字形式：`a+bi`、`a`、`-bi`、`i`。
///
/// 精度取自 formatter（`{:.5}`），未指定時使用最短表示。
/// 虛部係數為 ±1 時省略係數。
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let write_number = |f: &mut fmt::Formatter<'_>, v: f64| match f.precision() {
            Some(p) => write!(f, "{:.*}", p, v),
            None => write!(f, "{}", v),
        };
        if self.x != 0.0 || self.y == 0.0 {
            write_number(f, self.x)?;
        }
        if self.y != 0.0 {
            let sign = if self.y >= 0.0 { "+" } else { "-" };
            if self.x != 0.0 || sign == "-" {
                write!(f, "{}", sign)?;
            }
            if self.y.abs() != 1.0 {
                write_number(f, self.y.abs())?;
            }
            write!(f, "i")?;
        }
        Ok(())
    }
}
