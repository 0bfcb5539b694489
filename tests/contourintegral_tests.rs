use std::f64::consts::TAU;

use contourkit::contour::contourintegral::{
    contour_integral,
    integrate_along
};
use contourkit::contour::samplingpolicy::{
    Precision,
    SamplingPolicy
};
use contourkit::curve::catmullrom::catmullrom::build_catmull_rom;
use contourkit::curve::catmullrom::parametrization::Parametrization;
use contourkit::curve::curve::Curve;
use contourkit::function::analyticfunction::AxisRange;
use contourkit::function::functionregistry::well_known_registry;
use contourkit::math::complex::complex::Complex;

fn approx_eq(a: Complex, b: Complex, eps: f64) -> bool {
    a.distance(b) <= eps
}

fn circle(n: usize, radius: f64, center: Complex) -> Vec<Complex> {
    (0..n)
        .map(|k| center + Complex::expi(TAU * k as f64 / n as f64).mul_real(radius))
        .collect()
}

fn unit_circle_curve() -> Curve {
    build_catmull_rom(&circle(8, 1.0, Complex::ZERO), true, Parametrization::Centripetal).unwrap()
}

#[test]
fn reciprocal_winds_once_around_the_origin() {
    let f = well_known_registry().get("1/z").unwrap();
    let curve = unit_circle_curve();
    assert_eq!(curve.components().len(), 8);

    let policy = SamplingPolicy::default();
    let result = contour_integral(&f, &curve, &policy, Precision::Settled { point_hint: 8 });
    assert!(approx_eq(result.integral, Complex::new(0.0, TAU), 1e-6), "{result}");
    assert!(approx_eq(result.over_two_pi_i, Complex::ONE, 1e-6), "{result}");
}

#[test]
fn entire_function_integrates_to_zero() {
    let f = well_known_registry().get("z^2").unwrap();
    let v = integrate_along(&f, &unit_circle_curve(), 100);
    assert!(approx_eq(v, Complex::ZERO, 1e-7), "{v:?}");
}

#[test]
fn residues_of_registry_functions() {
    let registry = well_known_registry();
    let points = circle(24, 0.5, Complex::ZERO);
    let curve = build_catmull_rom(&points, true, Parametrization::Centripetal).unwrap();

    // 1/z^2 沒有留數
    let v = integrate_along(&registry.get("1/z^2").unwrap(), &curve, 100);
    assert!(approx_eq(v, Complex::ZERO, 1e-6), "{v:?}");

    // exp(1/z) 在 0 的留數為 1
    let v = integrate_along(&registry.get("exp(1/z)").unwrap(), &curve, 100);
    assert!(approx_eq(v, Complex::new(0.0, TAU), 1e-4), "{v:?}");

    // z/sin(z) 在 0 可去，圈內沒有極點
    let v = integrate_along(&registry.get("z/sin(z)").unwrap(), &curve, 100);
    assert!(approx_eq(v, Complex::ZERO, 1e-7), "{v:?}");
}

#[test]
fn only_enclosed_pole_contributes() {
    // 繞 z = 1 的小圓：1/(z^2-1) 的留數為 1/2
    let f = well_known_registry().get("1/(z^2-1)").unwrap();
    let curve = build_catmull_rom(&circle(16, 0.5, Complex::ONE), true, Parametrization::Chordal)
        .unwrap();
    let v = integrate_along(&f, &curve, 100);
    assert!(approx_eq(v, Complex::new(0.0, TAU / 2.0), 1e-6), "{v:?}");
}

#[test]
fn non_holomorphic_conjugate_measures_area() {
    // ∮ conj(z) dz = 2i · 面積
    let f = well_known_registry().get("conj(z)").unwrap();
    let square = [Complex::ZERO, Complex::ONE, Complex::new(1.0, 1.0), Complex::I];
    let curve = build_catmull_rom(&square, true, Parametrization::Uniform).unwrap();
    let v = integrate_along(&f, &curve, 100);
    assert!(v.x.abs() < 1e-6, "{v:?}");
    assert!(v.y > 1.0, "{v:?}");
}

#[test]
fn cube_roots_of_unity_in_the_square() {
    let f = well_known_registry().get("1/(z^3-1)").unwrap();
    let range = AxisRange::new(-2.0, 2.0);
    let roots = f.singularities_in(range, range);
    assert_eq!(roots.len(), 3);
    let expected = [
        Complex::ONE,
        Complex::new(-0.5, 3.0_f64.sqrt() / 2.0),
        Complex::new(-0.5, -(3.0_f64.sqrt()) / 2.0),
    ];
    for e in expected {
        assert!(roots.iter().any(|r| approx_eq(*r, e, 1e-15)), "missing {e:?} in {roots:?}");
    }
}

#[test]
fn draft_and_settled_agree_on_a_smooth_contour() {
    let f = well_known_registry().get("1/z").unwrap();
    let curve = unit_circle_curve();
    let policy = SamplingPolicy::default();
    let draft = contour_integral(&f, &curve, &policy, Precision::Draft);
    let settled = contour_integral(&f, &curve, &policy, Precision::Settled { point_hint: 8 });
    assert!(approx_eq(draft.integral, settled.integral, 1e-4));
}
