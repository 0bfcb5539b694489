use crate::curve::curve::ParametricCurve;
use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

/// c(t) = (1-t)·start + t·end
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: Complex,
    end: Complex,
}

impl Segment {
    pub fn new(start: Complex, end: Complex) -> Segment {
        Segment { start, end }
    }

    /// Zero-length curve sitting on `p`.
    pub fn degenerate(p: Complex) -> Segment {
        Segment::new(p, p)
    }

    pub fn start_point(&self) -> Complex {
        self.start
    }

    pub fn end_point(&self) -> Complex {
        self.end
    }
}

impl ParametricCurve for Segment {
    fn value(&self, t: f64) -> Complex {
        Complex::linear_combination2(1.0 - t, self.start, t, self.end)
    }

    fn diff(&self, t: Jet<f64>) -> Jet<Complex> {
        let u = Jet::one() - t;
        Jet::linear_combination2(
            u,
            Jet::constant(self.start),
            t,
            Jet::constant(self.end),
        )
    }
}
