use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("the scale of an affine transform must be a nonzero finite complex number")]
    DegenerateScale,
    #[error("the two source points of an affine transform coincide")]
    CoincidentPoints,
}
