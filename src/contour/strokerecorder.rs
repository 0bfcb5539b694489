use tracing::debug;

use crate::curve::catmullrom::catmullrom::build_catmull_rom;
use crate::curve::catmullrom::parametrization::Parametrization;
use crate::curve::curve::Curve;
use crate::curve::curveerror::CurveError;
use crate::math::complex::complex::Complex;
use crate::transform::affinetransform::AffineTransform;

/// View-space distance below which a new position replaces the last point.
pub const REPLACE_DISTANCE: f64 = 3.0;

/// 手勢結束後的曲線與點數提示。
#[derive(Clone, Debug, PartialEq)]
pub struct FinishedStroke {
    pub curve: Curve,
    pub point_hint: usize,
}

/// Accumulates model-space points of one pointer gesture.
///
/// 每次加入點都重新建整條曲線，不在原曲線上修改。
#[derive(Clone, Debug)]
pub struct StrokeRecorder {
    points: Vec<Complex>,
    closed: bool,
    parametrization: Parametrization,
    view_scale: f64,
    curve: Curve,
}

impl StrokeRecorder {
    /// `view` maps model coordinates to view coordinates; only its scale is used.
    pub fn begin(
        start: Complex,
        closed: bool,
        parametrization: Parametrization,
        view: &AffineTransform,
    ) -> Result<StrokeRecorder, CurveError> {
        let points = vec![start];
        let curve = build_catmull_rom(&points, closed, parametrization)?;
        Ok(StrokeRecorder {
            points,
            closed,
            parametrization,
            view_scale: view.scale().abs(),
            curve,
        })
    }

    /// 新點與最後一點在畫面上距離不到 `REPLACE_DISTANCE` 時取代最後一點。
    ///
    /// 建曲線失敗時點列與曲線都維持原狀。
    pub fn push(&mut self, z: Complex) -> Result<&Curve, CurveError> {
        let mut candidate = self.points.clone();
        if let Some(&last) = candidate.last() {
            if z.distance(last) * self.view_scale < REPLACE_DISTANCE {
                candidate.pop();
            }
        }
        candidate.push(z);
        let curve = build_catmull_rom(&candidate, self.closed, self.parametrization)?;
        self.points = candidate;
        self.curve = curve;
        Ok(&self.curve)
    }

    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn release(self) -> FinishedStroke {
        debug!(points = self.points.len(), closed = self.closed, "stroke released");
        FinishedStroke {
            point_hint: self.points.len(),
            curve: self.curve,
        }
    }
}
