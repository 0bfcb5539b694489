use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{
    info,
    warn
};

use crate::configurationerror::ConfigurationError;
use crate::contour::contourintegral::{
    contour_integral,
    ContourIntegral
};
use crate::contour::samplingpolicy::{
    Precision,
    SamplingPolicy
};
use crate::curve::catmullrom::catmullrom::build_catmull_rom;
use crate::curve::catmullrom::parametrization::Parametrization;
use crate::curve::curve::Curve;
use crate::function::analyticfunction::{
    AnalyticFunction,
    AxisRange
};
use crate::function::functionregistry::well_known_registry;
use crate::math::complex::complex::Complex;

fn default_settled() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationJsonProp {
    function: String,
    #[serde(default)]
    closed: bool,
    #[serde(default)]
    parametrization: Parametrization,
    points: Vec<Complex>,
    #[serde(default)]
    sampling: SamplingPolicy,
    #[serde(default = "default_settled")]
    settled: bool,
}

/// 一次閉路積分工作：函數、由點建出的曲線與取樣設定。
#[derive(Clone, Debug)]
pub struct Configuration {
    function: AnalyticFunction,
    parametrization: Parametrization,
    closed: bool,
    points: Vec<Complex>,
    curve: Curve,
    sampling: SamplingPolicy,
    settled: bool,
}

impl Configuration {
    pub fn from_json_value(
        json_value: serde_json::Value,
    ) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        info!(path = %file_path.as_ref().display(), "configuration loaded");
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(
        json_prop: ConfigurationJsonProp,
    ) -> Result<Configuration, ConfigurationError> {
        let function = well_known_registry().get(&json_prop.function).inspect_err(|_| {
            warn!(
                function = %json_prop.function,
                known = ?well_known_registry().names(),
                "unknown function name"
            );
        })?;
        let curve =
            build_catmull_rom(&json_prop.points, json_prop.closed, json_prop.parametrization)?;
        Ok(Configuration {
            function,
            parametrization: json_prop.parametrization,
            closed: json_prop.closed,
            points: json_prop.points,
            curve,
            sampling: json_prop.sampling,
            settled: json_prop.settled,
        })
    }

    pub fn function(&self) -> &AnalyticFunction {
        &self.function
    }

    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    pub fn closed(&self) -> bool {
        self.closed
    }

    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn sampling(&self) -> &SamplingPolicy {
        &self.sampling
    }

    /// Settled jobs use the point count as the precision hint.
    pub fn precision(&self) -> Precision {
        if self.settled {
            Precision::Settled { point_hint: self.points.len() }
        } else {
            Precision::Draft
        }
    }

    pub fn evaluate(&self) -> ContourIntegral {
        contour_integral(&self.function, &self.curve, &self.sampling, self.precision())
    }

    /// 點的外框（real 範圍, imag 範圍）。
    pub fn bounding_box(&self) -> (AxisRange, AxisRange) {
        let mut real = AxisRange::new(f64::INFINITY, f64::NEG_INFINITY);
        let mut imag = AxisRange::new(f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            real = AxisRange::new(real.min.min(p.x), real.max.max(p.x));
            imag = AxisRange::new(imag.min.min(p.y), imag.max.max(p.y));
        }
        (real, imag)
    }

    pub fn singularities_in_bounds(&self) -> Vec<Complex> {
        let (real, imag) = self.bounding_box();
        self.function.singularities_in(real, imag)
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(s)?;
        Configuration::from_json_prop(json_prop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::curveerror::CurveError;
    use crate::function::registryerror::RegistryError;

    #[test]
    fn test_defaults() {
        let config: Configuration = r#"{
            "function": "1/z",
            "points": [{"x": 1.0, "y": 0.0}, {"x": 0.0, "y": 1.0}, {"x": -1.0, "y": 0.0}]
        }"#
        .parse()
        .unwrap();
        assert_eq!(config.function().name(), "1/z");
        assert!(!config.closed());
        assert_eq!(config.parametrization(), Parametrization::Centripetal);
        assert_eq!(config.sampling(), &SamplingPolicy::default());
        assert_eq!(config.precision(), Precision::Settled { point_hint: 3 });
        let (real, imag) = config.bounding_box();
        assert_eq!(real, AxisRange::new(-1.0, 1.0));
        assert_eq!(imag, AxisRange::new(0.0, 1.0));
        assert_eq!(config.singularities_in_bounds(), vec![Complex::ZERO]);
    }

    #[test]
    fn test_errors_are_wrapped() {
        let unknown = r#"{"function": "sec(z)", "points": [{"x": 0.0, "y": 0.0}]}"#
            .parse::<Configuration>()
            .unwrap_err();
        assert!(matches!(
            unknown,
            ConfigurationError::Registry(RegistryError::NameNotFound(ref name)) if name == "sec(z)"
        ));

        let empty = r#"{"function": "z^2", "points": []}"#
            .parse::<Configuration>()
            .unwrap_err();
        assert!(matches!(empty, ConfigurationError::Curve(CurveError::EmptyPointList)));

        let malformed = "{\"function\": 3}".parse::<Configuration>().unwrap_err();
        assert!(matches!(malformed, ConfigurationError::JsonParse(_)));

        let missing = Configuration::from_reader("/nonexistent/contour.json").unwrap_err();
        assert!(matches!(missing, ConfigurationError::Io(_)));
    }
}
