use std::f64::consts::TAU;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::contour::samplingpolicy::{
    Precision,
    SamplingPolicy
};
use crate::curve::curve::{
    Curve,
    ParametricCurve
};
use crate::function::analyticfunction::AnalyticFunction;
use crate::math::complex::complex::Complex;
use crate::math::integrate::integrate;
use crate::math::jet::jet::Jet;

// ─────────────────────────────────────────────────────────────────────────────
// 閉路積分
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∮_c f(z) dz = ∫_0^1 f(c(t)) · c'(t) dt
//
// (c(t), c'(t)) 由 curve.diff(Jet::variable(t)) 一次取得。
// Spline 逐段在各自的 [0, 1] 上積分後相加，每段取樣數相同。

/// The raw contour integral and its value divided by 2πi.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContourIntegral {
    pub integral: Complex,
    pub over_two_pi_i: Complex,
}

impl ContourIntegral {
    pub fn from_integral(integral: Complex) -> ContourIntegral {
        ContourIntegral {
            integral,
            over_two_pi_i: integral / Complex::from_imag(TAU),
        }
    }
}

impl fmt::Display for ContourIntegral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(5);
        write!(
            f,
            "integral = {:.*}, integral / 2πi = {:.*}",
            precision, self.integral, precision, self.over_two_pi_i
        )
    }
}

/// f(c(t)) · c'(t)
pub fn integrand<C>(function: &AnalyticFunction, curve: &C, t: f64) -> Complex
where
    C: ParametricCurve + ?Sized,
{
    let ct: Jet<Complex> = curve.diff(Jet::variable(t));
    function.value(ct.value) * ct.diff
}

/// ∮ f dz with `samples` Simpson sub-intervals on every component.
pub fn integrate_along(function: &AnalyticFunction, curve: &Curve, samples: usize) -> Complex {
    curve
        .components()
        .iter()
        .fold(Complex::ZERO, |acc, component| {
            acc + integrate(|t| integrand(function, component, t), 0.0, 1.0, samples)
        })
}

/// 依 `policy` 與 `precision` 決定取樣數後積分。
pub fn contour_integral(
    function: &AnalyticFunction,
    curve: &Curve,
    policy: &SamplingPolicy,
    precision: Precision,
) -> ContourIntegral {
    let samples = policy.samples(curve, precision);
    let result = ContourIntegral::from_integral(integrate_along(function, curve, samples));
    debug!(
        function = function.name(),
        components = curve.components().len(),
        samples,
        ?precision,
        integral = %result.integral,
        "contour integral evaluated"
    );
    result
}
