use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("at least one point is required to build a curve")]
    EmptyPointList,
    #[error("a spline curve needs at least one component")]
    NoComponents,
    #[error("{components} components need {} knots, got {knots}", .components + 1)]
    KnotCountMismatch { components: usize, knots: usize },
    #[error("knot {index} is not strictly greater than the previous one")]
    KnotsNotIncreasing { index: usize },
    #[error("point {index} is not finite")]
    NonFinitePoint { index: usize },
}
