use nalgebra::Matrix3;
use serde::{
    Deserialize,
    Serialize
};

use crate::math::complex::complex::Complex;
use crate::transform::transformerror::TransformError;

// ─────────────────────────────────────────────────────────────────────────────
// AffineTransform
// ─────────────────────────────────────────────────────────────────────────────
//
// z ↦ s·z + t，s ≠ 0。對應的實矩陣：
//
//   ⎡ s.x  -s.y  t.x ⎤
//   ⎢ s.y   s.x  t.y ⎥
//   ⎣  0     0    1  ⎦
//
// 在合成下構成群，反元素為 w ↦ (w - t)/s。

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    scale: Complex,
    translate: Complex,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        scale: Complex::ONE,
        translate: Complex::ZERO,
    };

    pub fn new(scale: Complex, translate: Complex) -> Result<AffineTransform, TransformError> {
        if scale == Complex::ZERO || !scale.is_finite() {
            return Err(TransformError::DegenerateScale);
        }
        Ok(AffineTransform { scale, translate })
    }

    pub fn identity() -> AffineTransform {
        AffineTransform::IDENTITY
    }

    pub fn from_scale(scale: Complex) -> Result<AffineTransform, TransformError> {
        AffineTransform::new(scale, Complex::ZERO)
    }

    /// 唯一的 affine map 使 p0 ↦ q0 且 p1 ↦ q1。
    pub fn from_points(
        p0: Complex,
        q0: Complex,
        p1: Complex,
        q1: Complex,
    ) -> Result<AffineTransform, TransformError> {
        let pd = p1 - p0;
        if pd == Complex::ZERO {
            return Err(TransformError::CoincidentPoints);
        }
        let scale = (q1 - q0) / pd;
        let translate = (q0 * p1 - p0 * q1) / pd;
        AffineTransform::new(scale, translate)
    }

    /// p0 ↦ q0 with the given scale.
    pub fn from_point_and_scale(
        p0: Complex,
        q0: Complex,
        scale: Complex,
    ) -> Result<AffineTransform, TransformError> {
        AffineTransform::new(scale, q0 - p0 * scale)
    }

    pub fn scale(&self) -> Complex {
        self.scale
    }

    pub fn translate(&self) -> Complex {
        self.translate
    }

    pub fn transform(&self, z: Complex) -> Complex {
        self.scale * z + self.translate
    }

    pub fn untransform(&self, w: Complex) -> Complex {
        (w - self.translate) / self.scale
    }

    /// `self ∘ other`：先套用 `other` 再套用 `self`。
    pub fn composite(&self, other: &AffineTransform) -> AffineTransform {
        AffineTransform {
            scale: self.scale * other.scale,
            translate: self.transform(other.translate),
        }
    }

    pub fn inverse(&self) -> AffineTransform {
        let inv = self.scale.recip();
        AffineTransform {
            scale: inv,
            translate: -(inv * self.translate),
        }
    }

    /// Canvas 2D `setTransform(a, b, c, d, e, f)` coefficients.
    pub fn coefficients(&self) -> [f64; 6] {
        [
            self.scale.x,
            self.scale.y,
            -self.scale.y,
            self.scale.x,
            self.translate.x,
            self.translate.y,
        ]
    }

    pub fn to_matrix(&self) -> Matrix3<f64> {
        let (s, t) = (self.scale, self.translate);
        Matrix3::new(s.x, -s.y, t.x, s.y, s.x, t.y, 0.0, 0.0, 1.0)
    }
}

impl Default for AffineTransform {
    fn default() -> AffineTransform {
        AffineTransform::IDENTITY
    }
}
