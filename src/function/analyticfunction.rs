use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

/// Closed interval [min, max] on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> AxisRange {
        AxisRange { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// 與 `step` 的整數倍相交時可能用到的 k 範圍（兩端各放寬一格）。
    pub fn index_bounds(&self, step: f64) -> (i64, i64) {
        ((self.min / step).floor() as i64, (self.max / step).ceil() as i64)
    }
}

/// 一個具名函數的 value / diff / 奇異點列舉。
///
/// `diff(jet).value` 必須等於 `value(jet.value)`。
/// 以函數指標組成，可以放在 `static` 表裡。
#[derive(Clone, Copy)]
pub struct AnalyticFunction {
    name: &'static str,
    value: fn(Complex) -> Complex,
    diff: fn(Jet<Complex>) -> Jet<Complex>,
    singularities: fn(AxisRange, AxisRange) -> Vec<Complex>,
}

impl AnalyticFunction {
    pub const fn new(
        name: &'static str,
        value: fn(Complex) -> Complex,
        diff: fn(Jet<Complex>) -> Jet<Complex>,
        singularities: fn(AxisRange, AxisRange) -> Vec<Complex>,
    ) -> AnalyticFunction {
        AnalyticFunction { name, value, diff, singularities }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self, z: Complex) -> Complex {
        (self.value)(z)
    }

    pub fn diff(&self, z: Jet<Complex>) -> Jet<Complex> {
        (self.diff)(z)
    }

    /// Singularities inside the closed rectangle `real_range × imag_range`.
    pub fn singularities_in(&self, real_range: AxisRange, imag_range: AxisRange) -> Vec<Complex> {
        (self.singularities)(real_range, imag_range)
            .into_iter()
            .filter(|z| real_range.contains(z.x) && imag_range.contains(z.y))
            .collect()
    }
}

impl fmt::Debug for AnalyticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticFunction")
            .field("name", &self.name)
            .finish()
    }
}

impl PartialEq for AnalyticFunction {
    fn eq(&self, other: &AnalyticFunction) -> bool {
        self.name == other.name
    }
}
