use crate::curve::bezier::{
    CubicBezier,
    QuadraticBezier
};
use crate::curve::segment::Segment;
use crate::curve::splinecurve::SplineCurve;
use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

/// A C¹ curve in the complex plane, parametrized over [0, 1].
pub trait ParametricCurve {
    fn value(&self, t: f64) -> Complex;

    /// The point and its derivative, chained through the parameter jet `t`.
    fn diff(&self, t: Jet<f64>) -> Jet<Complex>;

    fn start(&self) -> Complex {
        self.value(0.0)
    }

    fn end(&self) -> Complex {
        self.value(1.0)
    }

    /// c'(t) with respect to the curve's own parameter.
    fn tangent(&self, t: f64) -> Complex {
        self.diff(Jet::variable(t)).diff
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Curve
// ─────────────────────────────────────────────────────────────────────────────
//
// 四種曲線的 sum type，每個分支各自求值；不需要更深的繼承結構。

#[derive(Clone, Debug, PartialEq)]
pub enum Curve {
    Segment(Segment),
    QuadraticBezier(QuadraticBezier),
    CubicBezier(CubicBezier),
    Spline(SplineCurve),
}

impl Curve {
    /// The pieces the contour integrator walks separately: the spline's
    /// components, or the curve itself.
    pub fn components(&self) -> &[Curve] {
        match self {
            Curve::Spline(spline) => spline.components(),
            _ => std::slice::from_ref(self),
        }
    }

    pub fn is_spline(&self) -> bool {
        matches!(self, Curve::Spline(_))
    }
}

impl ParametricCurve for Curve {
    fn value(&self, t: f64) -> Complex {
        match self {
            Curve::Segment(c) => c.value(t),
            Curve::QuadraticBezier(c) => c.value(t),
            Curve::CubicBezier(c) => c.value(t),
            Curve::Spline(c) => c.value(t),
        }
    }

    fn diff(&self, t: Jet<f64>) -> Jet<Complex> {
        match self {
            Curve::Segment(c) => c.diff(t),
            Curve::QuadraticBezier(c) => c.diff(t),
            Curve::CubicBezier(c) => c.diff(t),
            Curve::Spline(c) => c.diff(t),
        }
    }
}

impl From<Segment> for Curve {
    fn from(c: Segment) -> Curve {
        Curve::Segment(c)
    }
}

impl From<QuadraticBezier> for Curve {
    fn from(c: QuadraticBezier) -> Curve {
        Curve::QuadraticBezier(c)
    }
}

impl From<CubicBezier> for Curve {
    fn from(c: CubicBezier) -> Curve {
        Curve::CubicBezier(c)
    }
}

impl From<SplineCurve> for Curve {
    fn from(c: SplineCurve) -> Curve {
        Curve::Spline(c)
    }
}
