use crate::math::complex::complex::Complex;

// ─────────────────────────────────────────────────────────────────────────────
// 超越函數
// ─────────────────────────────────────────────────────────────────────────────
//
// 三角與雙曲函數一律以 expm1 分解：
//
//   e^{y}  = 1 + expm1(y)
//   e^{-y} = 1 + expm1(-y)
//
//   cosh y = (expm1(y) + expm1(-y) + 2) / 2
//   sinh y = (expm1(y) - expm1(-y)) / 2
//
// 虛部接近 0 時 sinh y 不會因 e^y - e^{-y} 相減而失去有效位數。
//
// 分支切割：
//   ln    ─ atan2 的值域 (-π, π]，切割在負實軸
//   sqrt  ─ 切割在負實軸；Re z < 0 時虛部符號跟隨 Im z（含 ±0 的符號）

impl Complex {
    pub fn exp(self) -> Complex {
        let m = self.x.exp();
        Complex::new(m * self.y.cos(), m * self.y.sin())
    }

    /// e^z - 1，實部以 expm1 與 2·sin²(y/2) 組合，z 接近 0 時不會相消。
    pub fn exp_m1(self) -> Complex {
        let half = (self.y * 0.5).sin();
        let x = self.x.exp_m1() * self.y.cos() - 2.0 * half * half;
        Complex::new(x, self.x.exp() * self.y.sin())
    }

    /// e^{it}
    pub fn expi(t: f64) -> Complex {
        Complex::new(t.cos(), t.sin())
    }

    /// Principal branch of the logarithm.
    pub fn ln(self) -> Complex {
        Complex::new(self.abs().ln(), self.arg())
    }

    pub fn sqrt(self) -> Complex {
        let a = self.abs();
        if a == 0.0 {
            Complex::ZERO
        } else if self.x >= 0.0 {
            let t = ((self.x + a) * 2.0).sqrt();
            Complex::new(t / 2.0, self.y / t)
        } else {
            let u = ((a - self.x) * 2.0).sqrt();
            Complex::new(self.y.abs() / u, sign_of(self.y) * u * 0.5)
        }
    }

    pub fn cos(self) -> Complex {
        let t0 = self.y.exp_m1();
        let t1 = (-self.y).exp_m1();
        let t2 = (t1 + t0 + 2.0) * self.x.cos();
        let t3 = (t1 - t0) * self.x.sin();
        Complex::new(t2 * 0.5, t3 * 0.5)
    }

    pub fn sin(self) -> Complex {
        let t0 = self.y.exp_m1();
        let t1 = (-self.y).exp_m1();
        let t2 = (t0 - t1) * self.x.cos();
        let t3 = (t0 + t1 + 2.0) * self.x.sin();
        Complex::new(t3 * 0.5, t2 * 0.5)
    }

    pub fn tan(self) -> Complex {
        let c = self.x.cos();
        let s = self.x.sin();
        let t3 = self.y.exp_m1();
        let t0 = (-self.y).exp_m1();
        let t6 = (t0 - t3) * c;
        let t7 = (t0 + t3 + 2.0) * s;
        let t8 = (t0 + t3 + 2.0) * c;
        let t9 = (t0 - t3) * s;
        let t10 = 1.0 / (t8 * t8 + t9 * t9);
        Complex::new((t7 * t8 - t6 * t9) * t10, -(t6 * t8 + t7 * t9) * t10)
    }

    /// -i·ln(z + i·sqrt(1 - z²))
    pub fn acos(self) -> Complex {
        let (x, y) = (self.x, self.y);
        let mut bx = x;
        let mut by = y;
        let mx = 1.0 - x * x + y * y;
        let my = -2.0 * x * y;
        let a = mx.hypot(my);
        if a != 0.0 {
            if mx >= 0.0 {
                let t = ((mx + a) * 2.0).sqrt();
                by += t / 2.0;
                bx -= my / t;
            } else {
                let u = ((a - mx) * 2.0).sqrt();
                by += my.abs() / u;
                bx -= sign_of(my) * u * 0.5;
            }
        }
        Complex::new(by.atan2(bx), -bx.hypot(by).ln())
    }

    pub fn asin(self) -> Complex {
        let t0 = 1.0 - self.x * self.x + self.y * self.y;
        let t1 = -2.0 * self.x * self.y;
        let t2 = (2.0 * (t0 + t0.hypot(t1))).sqrt();
        let t3 = -self.y + t2 * 0.5;
        let t4 = self.x + t1 / t2;
        Complex::new(t4.atan2(t3), -t3.hypot(t4).ln())
    }

    pub fn atan(self) -> Complex {
        let t0 = 1.0 - self.y;
        let t1 = 1.0 + self.y;
        let t2 = t1 * t1 + self.x * self.x;
        let t3 = (t0 * t1 - self.x * self.x) / t2;
        let t4 = 2.0 * self.x / t2;
        Complex::new(0.5 * t4.atan2(t3), -0.5 * t3.hypot(t4).ln())
    }

    pub fn cosh(self) -> Complex {
        let t0 = self.x.exp_m1();
        let t1 = (-self.x).exp_m1();
        let t2 = (t0 + t1 + 2.0) * self.y.cos();
        let t3 = (t0 - t1) * self.y.sin();
        Complex::new(t2 * 0.5, t3 * 0.5)
    }

    pub fn sinh(self) -> Complex {
        let t0 = self.x.exp_m1();
        let t1 = (-self.x).exp_m1();
        let t2 = (t0 - t1) * self.y.cos();
        let t3 = (t0 + t1 + 2.0) * self.y.sin();
        Complex::new(t2 * 0.5, t3 * 0.5)
    }

    pub fn tanh(self) -> Complex {
        let t0 = self.x.exp_m1();
        let t1 = (-self.x).exp_m1();
        let cy = self.y.cos();
        let sy = self.y.sin();
        let t6 = (t0 - t1) * cy;
        let t7 = (t0 + t1 + 2.0) * sy;
        let t8 = (t0 + t1 + 2.0) * cy;
        let t9 = (t0 - t1) * sy;
        let t10 = 1.0 / (t8 * t8 + t9 * t9);
        Complex::new((t6 * t8 + t7 * t9) * t10, (t7 * t8 - t6 * t9) * t10)
    }

    pub fn acosh(self) -> Complex {
        let (x, y) = (self.x, self.y);
        let mut bx = x;
        let mut by = y;
        let mx = 1.0 - x * x + y * y;
        let my = -2.0 * x * y;
        let a = mx.hypot(my);
        let sy = sign_of(y);
        if a != 0.0 {
            if mx >= 0.0 {
                let t = ((mx + a) * 2.0).sqrt();
                by += sy * t / 2.0;
                bx -= sy * my / t;
            } else {
                let u = ((a - mx) * 2.0).sqrt();
                by += sy * my.abs() / u;
                bx -= sy * sign_of(my) * u * 0.5;
            }
        }
        Complex::new(bx.hypot(by).ln(), by.atan2(bx))
    }

    pub fn asinh(self) -> Complex {
        let t0 = self.x * self.x - self.y * self.y + 1.0;
        let t1 = 2.0 * self.x * self.y;
        let t2 = ((t0 + t0.hypot(t1)) * 2.0).sqrt();
        let t3 = self.x + t2 * 0.5;
        let t4 = self.y + t1 / t2;
        Complex::new(t3.hypot(t4).ln(), t4.atan2(t3))
    }

    pub fn atanh(self) -> Complex {
        let t0 = 1.0 + self.x;
        let t1 = 1.0 - self.x;
        let t2 = t1 * t1 + self.y * self.y;
        let t3 = (t0 * t1 - self.y * self.y) / t2;
        let t4 = 2.0 * self.y / t2;
        Complex::new(t3.hypot(t4).ln() * 0.5, t4.atan2(t3) * 0.5)
    }

    /// z^w = exp(w·ln z)
    pub fn pow(self, w: Complex) -> Complex {
        (self.ln() * w).exp()
    }

    /// 整數次方，平方再相乘（square-and-multiply）；n < 0 時取 z^{-n} 的倒數。
    pub fn powi(self, n: i32) -> Complex {
        if n < 0 {
            return self.powi_unsigned(n.unsigned_abs()).recip();
        }
        self.powi_unsigned(n as u32)
    }

    fn powi_unsigned(self, mut n: u32) -> Complex {
        let mut acc = Complex::ONE;
        let mut z = self;
        while n != 0 {
            if n & 1 == 1 {
                acc = acc * z;
            }
            z = z.square();
            n >>= 1;
        }
        acc
    }
}

/// ±1 following the sign bit, so that sign_of(-0.0) == -1.
#[inline]
fn sign_of(v: f64) -> f64 {
    1.0_f64.copysign(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Complex, b: Complex, eps: f64) {
        assert!(a.distance(b) <= eps, "{a:?} != {b:?} (eps = {eps})");
    }

    #[test]
    fn test_sqrt_branch_cut_follows_sign_of_zero() {
        let above = Complex::new(-4.0, 0.0).sqrt();
        let below = Complex::new(-4.0, -0.0).sqrt();
        assert_eq!(above, Complex::new(0.0, 2.0));
        assert_eq!(below, Complex::new(0.0, -2.0));
        assert_eq!(Complex::ZERO.sqrt(), Complex::ZERO);
    }

    #[test]
    fn test_sqrt_squares_back() {
        for z in [
            Complex::new(3.0, 4.0),
            Complex::new(-3.0, 4.0),
            Complex::new(-3.0, -4.0),
            Complex::new(1e-300, -1e-300),
        ] {
            assert_close(z.sqrt().square(), z, 1e-12 * z.abs());
            assert!(z.sqrt().x >= 0.0);
        }
    }

    #[test]
    fn test_ln_principal_branch() {
        let z = Complex::new(-1.0, 0.0).ln();
        assert_close(z, Complex::new(0.0, std::f64::consts::PI), 1e-15);
        let w = Complex::new(-1.0, -0.0).ln();
        assert_close(w, Complex::new(0.0, -std::f64::consts::PI), 1e-15);
        assert_close(Complex::new(2.0, -3.0).ln().exp(), Complex::new(2.0, -3.0), 1e-14);
    }

    #[test]
    fn test_trig_near_zero_keeps_precision() {
        // sin(iy) = i sinh(y)，y 很小時 e^y - e^{-y} 會相消
        let y = 1e-12;
        let s = Complex::new(0.0, y).sin();
        assert!((s.y - y).abs() <= 1e-27, "{s:?}");
        let sh = Complex::new(y, 0.0).sinh();
        assert!((sh.x - y).abs() <= 1e-27, "{sh:?}");
        let th = Complex::new(y, 0.0).tanh();
        assert!((th.x - y).abs() <= 1e-27, "{th:?}");
        let t = Complex::new(0.0, y).tan();
        assert!((t.y - y).abs() <= 1e-27, "{t:?}");
    }

    #[test]
    fn test_exp_m1_near_zero() {
        let z = Complex::new(1e-10, -2e-10);
        let w = z.exp_m1();
        assert!(w.distance(z) < 1e-19, "{w:?}");
        let v = Complex::new(0.7, 2.1);
        assert_close(v.exp_m1(), v.exp() - Complex::ONE, 1e-14);
    }

    #[test]
    fn test_pythagorean_identities() {
        for z in [
            Complex::new(0.3, -0.7),
            Complex::new(1e-9, 2e-9),
            Complex::new(-2.0, 1.5),
        ] {
            let c = z.cos();
            let s = z.sin();
            assert_close(c.square() + s.square(), Complex::ONE, 1e-13);
            let ch = z.cosh();
            let sh = z.sinh();
            assert_close(ch.square() - sh.square(), Complex::ONE, 1e-13);
            assert_close(z.tan(), s / c, 1e-13);
            assert_close(z.tanh(), sh / ch, 1e-13);
        }
    }

    #[test]
    fn test_inverse_functions_round_trip() {
        let z = Complex::new(0.4, 0.3);
        assert_close(z.acos().cos(), z, 1e-13);
        assert_close(z.asin().sin(), z, 1e-13);
        assert_close(z.atan().tan(), z, 1e-13);
        assert_close(z.acosh().cosh(), z, 1e-13);
        assert_close(z.asinh().sinh(), z, 1e-13);
        assert_close(z.atanh().tanh(), z, 1e-13);
    }

    #[test]
    fn test_powi_matches_repeated_multiplication() {
        let z = Complex::new(0.9, -1.1);
        let mut expected = Complex::ONE;
        for n in 0..8 {
            assert_close(z.powi(n), expected, 1e-12);
            expected = expected * z;
        }
        assert_close(z.powi(-3), (z * z * z).recip(), 1e-12);
        assert_close(z.pow(Complex::from_real(2.0)), z.square(), 1e-12);
    }
}
