use thiserror::Error;

use crate::curve::curveerror::CurveError;
use crate::function::registryerror::RegistryError;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration json: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
