use crate::curve::curve::ParametricCurve;
use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

// ─────────────────────────────────────────────────────────────────────────────
// Bézier 曲線
// ─────────────────────────────────────────────────────────────────────────────
//
// De Casteljau：以巢狀的 (1-t)·P + t·Q 線性組合求值。
// diff 走同一組線性組合，只是換成 jet，
// 所以 value 與 diff 永遠一致，不需另外手推導數多項式。

/// c(t) = (1-t)²·start + 2(1-t)t·control + t²·end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier {
    start: Complex,
    control: Complex,
    end: Complex,
}

impl QuadraticBezier {
    pub fn new(start: Complex, control: Complex, end: Complex) -> QuadraticBezier {
        QuadraticBezier { start, control, end }
    }

    pub fn control_points(&self) -> [Complex; 3] {
        [self.start, self.control, self.end]
    }
}

impl ParametricCurve for QuadraticBezier {
    fn value(&self, t: f64) -> Complex {
        let u = 1.0 - t;
        let p1 = Complex::linear_combination2(u, self.start, t, self.control);
        let p2 = Complex::linear_combination2(u, self.control, t, self.end);
        Complex::linear_combination2(u, p1, t, p2)
    }

    fn diff(&self, t: Jet<f64>) -> Jet<Complex> {
        let u = Jet::one() - t;
        let start = Jet::constant(self.start);
        let control = Jet::constant(self.control);
        let end = Jet::constant(self.end);
        let p1 = Jet::linear_combination2(u, start, t, control);
        let p2 = Jet::linear_combination2(u, control, t, end);
        Jet::linear_combination2(u, p1, t, p2)
    }
}

/// c(t) = (1-t)³·start + 3(1-t)²t·control1 + 3(1-t)t²·control2 + t³·end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    start: Complex,
    control1: Complex,
    control2: Complex,
    end: Complex,
}

impl CubicBezier {
    pub fn new(start: Complex, control1: Complex, control2: Complex, end: Complex) -> CubicBezier {
        CubicBezier { start, control1, control2, end }
    }

    pub fn control_points(&self) -> [Complex; 4] {
        [self.start, self.control1, self.control2, self.end]
    }
}

impl ParametricCurve for CubicBezier {
    fn value(&self, t: f64) -> Complex {
        let u = 1.0 - t;
        let p1 = Complex::linear_combination2(u, self.start, t, self.control1);
        let p2 = Complex::linear_combination2(u, self.control1, t, self.control2);
        let p3 = Complex::linear_combination2(u, self.control2, t, self.end);
        let q1 = Complex::linear_combination2(u, p1, t, p2);
        let q2 = Complex::linear_combination2(u, p2, t, p3);
        Complex::linear_combination2(u, q1, t, q2)
    }

    fn diff(&self, t: Jet<f64>) -> Jet<Complex> {
        let u = Jet::one() - t;
        let start = Jet::constant(self.start);
        let control1 = Jet::constant(self.control1);
        let control2 = Jet::constant(self.control2);
        let end = Jet::constant(self.end);
        let p1 = Jet::linear_combination2(u, start, t, control1);
        let p2 = Jet::linear_combination2(u, control1, t, control2);
        let p3 = Jet::linear_combination2(u, control2, t, end);
        let q1 = Jet::linear_combination2(u, p1, t, p2);
        let q2 = Jet::linear_combination2(u, p2, t, p3);
        Jet::linear_combination2(u, q1, t, q2)
    }
}
