use std::f64::consts::TAU;
use std::fs;

use contourkit::configuration::Configuration;
use contourkit::configurationerror::ConfigurationError;
use contourkit::contour::samplingpolicy::Precision;
use contourkit::curve::catmullrom::parametrization::Parametrization;
use contourkit::curve::curveerror::CurveError;
use contourkit::math::complex::complex::Complex;

fn approx_eq(a: Complex, b: Complex, eps: f64) -> bool {
    a.distance(b) <= eps
}

fn circle_json(function: &str) -> String {
    let points: Vec<serde_json::Value> = (0..8)
        .map(|k| {
            let z = Complex::expi(TAU * k as f64 / 8.0);
            serde_json::json!({"x": z.x, "y": z.y})
        })
        .collect();
    serde_json::json!({
        "function": function,
        "closed": true,
        "parametrization": "Centripetal",
        "points": points,
        "sampling": {"settled_samples_per_component": 200},
        "settled": true
    })
    .to_string()
}

#[test]
fn loads_job_from_file_and_evaluates() {
    let path = std::env::temp_dir().join(format!("contourkit-config-{}.json", std::process::id()));
    fs::write(&path, circle_json("1/z")).unwrap();
    let config = Configuration::from_reader(&path);
    let _ = fs::remove_file(&path);
    let config = config.unwrap();

    assert!(config.closed());
    assert_eq!(config.parametrization(), Parametrization::Centripetal);
    assert_eq!(config.sampling().settled_samples_per_component, 200);
    assert_eq!(config.sampling().draft_samples_per_component, 20);
    assert_eq!(config.precision(), Precision::Settled { point_hint: 8 });

    let result = config.evaluate();
    assert!(approx_eq(result.over_two_pi_i, Complex::ONE, 1e-6), "{result}");
    assert_eq!(config.singularities_in_bounds(), vec![Complex::ZERO]);
}

#[test]
fn draft_jobs_use_draft_precision() {
    let json = circle_json("z^2").replace("\"settled\":true", "\"settled\":false");
    let config: Configuration = json.parse().unwrap();
    assert_eq!(config.precision(), Precision::Draft);
    assert!(approx_eq(config.evaluate().integral, Complex::ZERO, 1e-6));
    assert!(config.singularities_in_bounds().is_empty());
}

#[test]
fn value_form_and_error_paths() {
    let value = serde_json::json!({
        "function": "tan(z)",
        "points": [{"x": 0.0, "y": 0.0}, {"x": 0.0, "y": 0.0}, {"x": 2.0, "y": 1.0}]
    });
    let config = Configuration::from_json_value(value).unwrap();
    // 重複點被去掉後只剩一條線段
    assert!(!config.curve().is_spline());
    assert_eq!(config.singularities_in_bounds(), vec![Complex::from_real(TAU / 4.0)]);

    let bad = serde_json::json!({
        "function": "z^2",
        "points": [{"x": 0.0, "y": 0.0}],
        "colour": "red"
    });
    assert!(matches!(
        Configuration::from_json_value(bad),
        Err(ConfigurationError::JsonParse(_))
    ));

    let empty = r#"{"function": "z^2", "points": []}"#.parse::<Configuration>();
    assert!(matches!(empty, Err(ConfigurationError::Curve(CurveError::EmptyPointList))));
}
