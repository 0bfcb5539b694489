use tracing::{
    debug,
    warn
};

use crate::curve::bezier::{
    CubicBezier,
    QuadraticBezier
};
use crate::curve::catmullrom::parametrization::Parametrization;
use crate::curve::curve::Curve;
use crate::curve::curveerror::CurveError;
use crate::curve::segment::Segment;
use crate::curve::splinecurve::SplineCurve;
use crate::math::complex::complex::Complex;

// ─────────────────────────────────────────────────────────────────────────────
// Non-uniform Catmull-Rom
// ─────────────────────────────────────────────────────────────────────────────
//
// 節點 p_i 的切線（對全域參數 t）：
//
//   m_i = h_i / (h_{i-1}(h_{i-1}+h_i)) · (p_i - p_{i-1})
//       + h_{i-1} / (h_i(h_{i-1}+h_i)) · (p_{i+1} - p_i)
//
// 即兩側差商以對側間距加權平均；uniform（h = 1）時退化為 (p_{i+1} - p_{i-1}) / 2。
//
// 區間 [t_i, t_{i+1}]（寬 h_i）轉成三次 Bézier：
//
//   control1 = p_i     + h_i/3 · m_i
//   control2 = p_{i+1} - h_i/3 · m_{i+1}
//
// 端點區間只有一側切線，轉成二次 Bézier：
//
//   第一段 control = p_1     - h_0/2 · m_1
//   最後段 control = p_{n-2} + h_{n-2}/2 · m_{n-2}
//
// 相鄰兩段在共用節點的 c'(t) 都等於 m_i，所以曲線為 C¹。

/// m_i as a combination of the three neighbouring points.
fn tangent(prev: Complex, p: Complex, next: Complex, h_prev: f64, h_next: f64) -> Complex {
    let sum = h_prev + h_next;
    let a = -h_next / (h_prev * sum);
    let b = (h_next - h_prev) / (h_prev * h_next);
    let c = h_prev / (h_next * sum);
    Complex::linear_combination3(a, prev, b, p, c, next)
}

fn cubic_between(p0: Complex, m0: Complex, p1: Complex, m1: Complex, h: f64) -> Curve {
    let control1 = Complex::linear_combination2(1.0, p0, h / 3.0, m0);
    let control2 = Complex::linear_combination2(1.0, p1, -h / 3.0, m1);
    Curve::from(CubicBezier::new(p0, control1, control2, p1))
}

/// 去掉會讓節點無法嚴格遞增的點：連續重複的點，以及間距小到
/// 加進累計節點後數值不變的點。封閉曲線另外去掉繞回起點時
/// 同樣不會前進的尾端點（含與起點相同的點）。
fn without_stalled_knots(
    points: &[Complex],
    closed: bool,
    parametrization: Parametrization,
) -> Vec<Complex> {
    let mut unique: Vec<Complex> = Vec::with_capacity(points.len());
    let mut knots: Vec<f64> = Vec::with_capacity(points.len());
    for &p in points {
        match (unique.last(), knots.last()) {
            (Some(&last), Some(&t)) => {
                let next = t + parametrization.spacing(last, p);
                if p != last && next > t {
                    unique.push(p);
                    knots.push(next);
                }
            }
            _ => {
                unique.push(p);
                knots.push(0.0);
            }
        }
    }
    if closed {
        while let (Some(&first), Some(&last), Some(&t)) =
            (unique.first(), unique.last(), knots.last())
        {
            let advances = t + parametrization.spacing(last, first) > t;
            if unique.len() < 2 || (last != first && advances) {
                break;
            }
            unique.pop();
            knots.pop();
        }
    }
    unique
}

fn build_open(points: &[Complex], parametrization: Parametrization) -> Result<Curve, CurveError> {
    let n = points.len();
    match n {
        1 => Ok(Curve::from(Segment::degenerate(points[0]))),
        2 => Ok(Curve::from(Segment::new(points[0], points[1]))),
        _ => {
            let knots = parametrization.knots(points);
            let h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
            // m[i] 只對內部點 1..=n-2 有意義
            let mut m = vec![Complex::ZERO; n];
            for i in 1..(n - 1) {
                m[i] = tangent(points[i - 1], points[i], points[i + 1], h[i - 1], h[i]);
            }

            let mut components = Vec::with_capacity(n - 1);
            let first_control = Complex::linear_combination2(1.0, points[1], -h[0] / 2.0, m[1]);
            components.push(Curve::from(QuadraticBezier::new(points[0], first_control, points[1])));
            for i in 1..(n - 2) {
                components.push(cubic_between(points[i], m[i], points[i + 1], m[i + 1], h[i]));
            }
            let last_control =
                Complex::linear_combination2(1.0, points[n - 2], h[n - 2] / 2.0, m[n - 2]);
            components.push(Curve::from(QuadraticBezier::new(
                points[n - 2],
                last_control,
                points[n - 1],
            )));

            Ok(Curve::from(SplineCurve::new(components, knots)?))
        }
    }
}

fn build_closed(points: &[Complex], parametrization: Parametrization) -> Result<Curve, CurveError> {
    let n = points.len();
    match n {
        1 => Ok(Curve::from(Segment::degenerate(points[0]))),
        2 => {
            let components = vec![
                Curve::from(Segment::new(points[0], points[1])),
                Curve::from(Segment::new(points[1], points[0])),
            ];
            let mut knots = parametrization.periodic_knots(points);
            knots.truncate(n + 1);
            Ok(Curve::from(SplineCurve::new(components, knots)?))
        }
        _ => {
            // knots[0..=n]：各點與繞回的節點；knots[n+1]：週期延伸
            let knots = parametrization.periodic_knots(points);
            let mut h: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
            // 週期延伸的間距就是 h_0；直接取用，不經大數相減
            h[n] = h[0];
            let at = |i: usize| points[i % n];

            // m[i] for i in 1..=n；m[n] 即 p_0 的切線
            let mut m = vec![Complex::ZERO; n + 1];
            for i in 1..=n {
                m[i] = tangent(at(i - 1), at(i), at(i + 1), h[i - 1], h[i]);
            }
            m[0] = m[n];

            let components = (0..n)
                .map(|i| cubic_between(at(i), m[i], at(i + 1), m[i + 1], h[i]))
                .collect();
            let mut spline_knots = knots;
            spline_knots.truncate(n + 1);
            Ok(Curve::from(SplineCurve::new(components, spline_knots)?))
        }
    }
}

/// Builds the C¹ interpolating curve through `points`.
///
/// 一個點退化為零長度線段；開放曲線兩個點為一條線段，
/// 封閉曲線兩個點為來回兩條線段。
pub fn build_catmull_rom(
    points: &[Complex],
    closed: bool,
    parametrization: Parametrization,
) -> Result<Curve, CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyPointList);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(CurveError::NonFinitePoint { index });
    }

    let unique = without_stalled_knots(points, closed, parametrization);
    if unique.len() != points.len() {
        warn!(
            dropped = points.len() - unique.len(),
            "points that do not advance the knot sequence dropped"
        );
    }

    let curve = if closed {
        build_closed(&unique, parametrization)?
    } else {
        build_open(&unique, parametrization)?
    };
    debug!(
        points = unique.len(),
        closed,
        ?parametrization,
        components = curve.components().len(),
        "built Catmull-Rom curve"
    );
    Ok(curve)
}
