use serde::{
    Deserialize,
    Serialize
};

use crate::math::complex::complex::Complex;

/// How Catmull-Rom knots are spaced between consecutive sample points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parametrization {
    /// Δt = 1
    Uniform,
    /// Δt = |p_{i+1} - p_i|
    Chordal,
    /// Δt = |p_{i+1} - p_i|^{1/2}
    #[default]
    Centripetal,
}

impl Parametrization {
    pub fn spacing(self, from: Complex, to: Complex) -> f64 {
        match self {
            Parametrization::Uniform => 1.0,
            Parametrization::Chordal => from.distance(to),
            Parametrization::Centripetal => from.distance(to).sqrt(),
        }
    }

    /// 累加間距：t_0 = 0, t_{i+1} = t_i + Δt_i
    pub fn knots(self, points: &[Complex]) -> Vec<f64> {
        let mut knots = Vec::with_capacity(points.len());
        let mut t = 0.0;
        knots.push(t);
        for w in points.windows(2) {
            t += self.spacing(w[0], w[1]);
            knots.push(t);
        }
        knots
    }

    /// 封閉曲線的節點：t_0..t_{n-1} 對應各點，t_n 為繞回 p_0 的節點，
    /// 再以週期 T = t_n - t_0 延伸 t_{n+1} = t_1 + T，
    /// 讓 p_0（= p_n）的切線公式讀得到兩側的間距。
    ///
    /// 回傳長度為 n + 2；需要 n ≥ 2。
    pub fn periodic_knots(self, points: &[Complex]) -> Vec<f64> {
        let n = points.len();
        let mut knots = self.knots(points);
        let closing = knots[n - 1] + self.spacing(points[n - 1], points[0]);
        knots.push(closing);
        let period = closing - knots[0];
        knots.push(knots[1] + period);
        knots
    }
}
