use crate::curve::curve::{
    Curve,
    ParametricCurve
};
use crate::curve::curveerror::CurveError;
use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

// ─────────────────────────────────────────────────────────────────────────────
// SplineCurve
// ─────────────────────────────────────────────────────────────────────────────
//
// N 段元件曲線 c_0, ..., c_{N-1} 與嚴格遞增的節點 t_0 < ... < t_N。
// 節點在建構時以仿射變換正規化成 t_0 = 0、t_N = 1。
//
//   c(t) = c_k((t - t_k) / h_k),  t_k ≤ t < t_{k+1},  h_k = t_{k+1} - t_k
//   c'(t) = c_k'(·) / h_k
//
// t = 1 歸到最後一段。
// 元件需滿足 c_k(1) = c_{k+1}(0)；由建構者（Catmull-Rom）保證。

#[derive(Clone, Debug, PartialEq)]
pub struct SplineCurve {
    components: Vec<Curve>,
    knots: Vec<f64>,
}

impl SplineCurve {
    /// 節點可為任意嚴格遞增、有限的數列，內部會正規化到 [0, 1]。
    pub fn new(components: Vec<Curve>, knots: Vec<f64>) -> Result<SplineCurve, CurveError> {
        if components.is_empty() {
            return Err(CurveError::NoComponents);
        }
        if knots.len() != components.len() + 1 {
            return Err(CurveError::KnotCountMismatch {
                components: components.len(),
                knots: knots.len(),
            });
        }
        for i in 1..knots.len() {
            // `!(a < b)` 同時擋下 NaN
            if !(knots[i - 1] < knots[i]) || !knots[i].is_finite() || !knots[i - 1].is_finite() {
                return Err(CurveError::KnotsNotIncreasing { index: i });
            }
        }

        let first = knots[0];
        let span = knots[knots.len() - 1] - first;
        let last_index = knots.len() - 1;
        let knots = knots
            .iter()
            .enumerate()
            .map(|(i, &t)| {
                if i == last_index {
                    1.0
                } else {
                    (t - first) / span
                }
            })
            .collect();
        Ok(SplineCurve { components, knots })
    }

    /// Knots at k/N.
    pub fn uniform(components: Vec<Curve>) -> Result<SplineCurve, CurveError> {
        let knots = (0..=components.len()).map(|k| k as f64).collect();
        SplineCurve::new(components, knots)
    }

    pub fn components(&self) -> &[Curve] {
        &self.components
    }

    /// Normalized knots, `knots()[0] == 0` and `knots().last() == 1`.
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 二分搜尋 t_k ≤ t < t_{k+1}；超出範圍時夾到第一段或最後一段。
    pub fn find_segment(&self, t: f64) -> usize {
        let last = self.components.len() - 1;
        if t <= 0.0 {
            0
        } else if t >= 1.0 {
            last
        } else {
            // NaN 不滿足任何比較，partition_point 為 0，落到第一段
            self.knots.partition_point(|&k| k <= t).saturating_sub(1).min(last)
        }
    }

    fn local_parameter(&self, k: usize, t: f64) -> (f64, f64) {
        let h = self.knots[k + 1] - self.knots[k];
        ((t - self.knots[k]) / h, h)
    }
}

impl ParametricCurve for SplineCurve {
    fn value(&self, t: f64) -> Complex {
        let k = self.find_segment(t);
        let (s, _) = self.local_parameter(k, t);
        self.components[k].value(s)
    }

    fn diff(&self, t: Jet<f64>) -> Jet<Complex> {
        let k = self.find_segment(t.value);
        let (s, h) = self.local_parameter(k, t.value);
        self.components[k].diff(Jet::new(s, t.diff / h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::segment::Segment;

    fn polyline(points: &[Complex]) -> Vec<Curve> {
        points
            .windows(2)
            .map(|w| Curve::from(Segment::new(w[0], w[1])))
            .collect()
    }

    #[test]
    fn test_knots_are_normalized() {
        let pts = [Complex::ZERO, Complex::ONE, Complex::new(1.0, 1.0)];
        let spline = SplineCurve::new(polyline(&pts), vec![2.0, 3.0, 6.0]).unwrap();
        assert_eq!(spline.knots(), &[0.0, 0.25, 1.0]);
    }

    #[test]
    fn test_find_segment_clamps_boundaries() {
        let pts = [Complex::ZERO, Complex::ONE, Complex::new(1.0, 1.0), Complex::I];
        let spline = SplineCurve::uniform(polyline(&pts)).unwrap();
        assert_eq!(spline.find_segment(-0.5), 0);
        assert_eq!(spline.find_segment(0.0), 0);
        assert_eq!(spline.find_segment(0.5), 1);
        assert_eq!(spline.find_segment(2.0 / 3.0), 2);
        assert_eq!(spline.find_segment(1.0), 2);
        assert_eq!(spline.value(1.0), Complex::I);
    }

    #[test]
    fn test_nan_parameter_does_not_panic() {
        let pts = [Complex::ZERO, Complex::ONE, Complex::I];
        let spline = SplineCurve::uniform(polyline(&pts)).unwrap();
        assert_eq!(spline.find_segment(f64::NAN), 0);
        assert!(spline.value(f64::NAN).is_nan());
        assert!(spline.diff(Jet::variable(f64::NAN)).diff.is_nan());
    }

    #[test]
    fn test_diff_scales_by_knot_spacing() {
        let pts = [Complex::ZERO, Complex::ONE, Complex::new(1.0, 1.0)];
        let spline = SplineCurve::new(polyline(&pts), vec![0.0, 0.25, 1.0]).unwrap();
        // 第一段長 1、佔 0.25 的參數區間 → 速度 4
        let d0 = spline.tangent(0.1);
        assert!((d0.x - 4.0).abs() < 1e-12 && d0.y.abs() < 1e-12);
        let d1 = spline.tangent(0.5);
        assert!(d1.x.abs() < 1e-12 && (d1.y - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(spline.diff(Jet::variable(0.5)).value, spline.value(0.5));
    }

    #[test]
    fn test_construction_errors() {
        let pts = [Complex::ZERO, Complex::ONE, Complex::I];
        assert_eq!(
            SplineCurve::new(polyline(&pts), vec![0.0, 1.0]),
            Err(CurveError::KnotCountMismatch { components: 2, knots: 2 })
        );
        assert_eq!(
            SplineCurve::new(polyline(&pts), vec![0.0, 1.0, 1.0]),
            Err(CurveError::KnotsNotIncreasing { index: 2 })
        );
        assert_eq!(
            SplineCurve::new(polyline(&pts), vec![0.0, f64::NAN, 1.0]),
            Err(CurveError::KnotsNotIncreasing { index: 1 })
        );
        assert_eq!(SplineCurve::new(Vec::new(), vec![0.0]), Err(CurveError::NoComponents));
    }
}
