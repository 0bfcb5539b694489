use serde::{
    Deserialize,
    Serialize
};

use crate::curve::curve::Curve;

/// 拖曳中以低取樣數即時更新，放開後再以高取樣數重算。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precision {
    Draft,
    /// `point_hint`：手勢期間收集到的點數。
    Settled { point_hint: usize },
}

/// Simpson sub-interval counts for the two precision levels.
///
/// Spline curves are sampled per component; any other curve is sampled as a
/// whole, with the settled count scaled by the gesture's point count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPolicy {
    pub draft_samples_per_component: usize,
    pub settled_samples_per_component: usize,
    pub single_curve_samples: usize,
    pub min_point_hint: usize,
}

impl Default for SamplingPolicy {
    fn default() -> SamplingPolicy {
        SamplingPolicy {
            draft_samples_per_component: 20,
            settled_samples_per_component: 100,
            single_curve_samples: 100,
            min_point_hint: 10,
        }
    }
}

impl SamplingPolicy {
    /// Sub-intervals for each entry of `curve.components()`.
    pub fn samples(&self, curve: &Curve, precision: Precision) -> usize {
        match (curve.is_spline(), precision) {
            (true, Precision::Draft) => self.draft_samples_per_component,
            (true, Precision::Settled { .. }) => self.settled_samples_per_component,
            (false, Precision::Draft) => self.single_curve_samples,
            (false, Precision::Settled { point_hint }) => {
                self.single_curve_samples
                    .saturating_mul(point_hint.max(self.min_point_hint))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::segment::Segment;
    use crate::curve::splinecurve::SplineCurve;
    use crate::math::complex::complex::Complex;

    #[test]
    fn test_default_counts() {
        let policy = SamplingPolicy::default();
        let segment = Curve::from(Segment::new(Complex::ZERO, Complex::ONE));
        let second = Curve::from(Segment::new(Complex::ONE, Complex::I));
        let spline = Curve::from(SplineCurve::uniform(vec![segment.clone(), second]).unwrap());

        assert_eq!(policy.samples(&spline, Precision::Draft), 20);
        assert_eq!(policy.samples(&spline, Precision::Settled { point_hint: 50 }), 100);
        assert_eq!(policy.samples(&segment, Precision::Draft), 100);
        assert_eq!(policy.samples(&segment, Precision::Settled { point_hint: 2 }), 1000);
        assert_eq!(policy.samples(&segment, Precision::Settled { point_hint: 30 }), 3000);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let policy: SamplingPolicy =
            serde_json::from_str(r#"{"settled_samples_per_component": 400}"#).unwrap();
        assert_eq!(policy.settled_samples_per_component, 400);
        assert_eq!(policy.draft_samples_per_component, 20);
    }
}
