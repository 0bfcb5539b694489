use crate::math::complex::complex::Complex;

// ─────────────────────────────────────────────────────────────────────────────
// Composite Simpson
// ─────────────────────────────────────────────────────────────────────────────
//
// 將 [from, to] 等分為 n 個子區間（寬度 d），每個子區間：
//
//   d/6 · (f(left) + 4·f(mid) + f(right))
//
// 右端點的值留給下一個子區間當左端點，總共 2n + 1 次求值。
// 固定取樣數，不做誤差控制。

pub const DEFAULT_SAMPLES: usize = 100;

/// ∫_{from}^{to} f(t) dt
///
/// `n == 0` 時回傳 0。
pub fn integrate<F>(mut f: F, from: f64, to: f64, n: usize) -> Complex
where
    F: FnMut(f64) -> Complex,
{
    if n == 0 {
        return Complex::ZERO;
    }
    let d = (to - from) / n as f64;
    let mut x = 0.0;
    let mut y = 0.0;
    let mut v0 = f(from);
    for i in 1..=n {
        let v1 = f(from + (i as f64 - 0.5) * d);
        let v2 = f(from + i as f64 * d);
        x += d * (v0.x + 4.0 * v1.x + v2.x) / 6.0;
        y += d * (v0.y + 4.0 * v1.y + v2.y) / 6.0;
        v0 = v2;
    }
    Complex::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_is_exact() {
        // Simpson 對三次多項式精確
        let v = integrate(|t| Complex::new(t * t * t, 1.0 - t), 0.0, 2.0, 3);
        assert!((v.x - 4.0).abs() < 1e-13);
        assert!(v.y.abs() < 1e-13);
    }

    #[test]
    fn test_unit_circle_exponential() {
        // ∫_0^{2π} e^{it} dt = 0
        let v = integrate(Complex::expi, 0.0, 2.0 * std::f64::consts::PI, 64);
        assert!(v.abs() < 1e-12);
    }

    #[test]
    fn test_reversed_bounds_change_sign() {
        let f = |t: f64| Complex::new(t.sin(), t.cos());
        let a = integrate(f, 0.0, 1.0, 50);
        let b = integrate(f, 1.0, 0.0, 50);
        assert!((a + b).abs() < 1e-14);
    }

    #[test]
    fn test_zero_samples() {
        assert_eq!(integrate(|_| Complex::ONE, 0.0, 1.0, 0), Complex::ZERO);
    }
}
