use std::f64::consts::{
    FRAC_PI_2,
    PI,
    TAU
};

use crate::function::analyticfunction::{
    AnalyticFunction,
    AxisRange
};
use crate::math::complex::complex::Complex;
use crate::math::jet::jet::Jet;

// ─────────────────────────────────────────────────────────────────────────────
// 內建函數表
// ─────────────────────────────────────────────────────────────────────────────
//
// 名稱是對外的穩定識別字，設定檔與 CLI 都以名稱查詢。
// 每一項的 diff 都以 jet 運算組成，value 則以同樣的 Complex 運算寫出，
// 兩者在同一點的值一致。

pub const WELL_KNOWN_FUNCTIONS: [AnalyticFunction; 11] = [
    AnalyticFunction::new("z^2", square_value, square_diff, no_singularities),
    AnalyticFunction::new("1/z", recip_value, recip_diff, origin),
    AnalyticFunction::new("1/z^2", recip_square_value, recip_square_diff, origin),
    AnalyticFunction::new("1/(z^2-1)", two_poles_value, two_poles_diff, plus_minus_one),
    AnalyticFunction::new("1/(z^3-1)", cube_roots_value, cube_roots_diff, cube_roots_of_unity),
    AnalyticFunction::new("exp(1/z)", exp_recip_value, exp_recip_diff, origin),
    AnalyticFunction::new("z/(e^z-1)", bernoulli_value, bernoulli_diff, bernoulli_poles),
    AnalyticFunction::new("tan(z)", tan_value, tan_diff, tan_poles),
    AnalyticFunction::new("z/sin(z)", z_over_sin_value, z_over_sin_diff, z_over_sin_poles),
    AnalyticFunction::new("conj(z)", conj_value, conj_diff, no_singularities),
    AnalyticFunction::new("(z+conj(z))/2", real_part_value, real_part_diff, no_singularities),
];

// ─────────────────────────────────────────────────────────────────────────────
// 奇異點列舉
// ─────────────────────────────────────────────────────────────────────────────

fn no_singularities(_real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    Vec::new()
}

fn origin(_real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    vec![Complex::ZERO]
}

fn plus_minus_one(_real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    vec![Complex::ONE, Complex::MINUS_ONE]
}

fn cube_roots_of_unity(_real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    vec![
        Complex::ONE,
        Complex::expi(TAU / 3.0),
        Complex::expi(2.0 * TAU / 3.0),
    ]
}

/// 2kπi, k ≠ 0（k = 0 可去）
fn bernoulli_poles(_real: AxisRange, imag: AxisRange) -> Vec<Complex> {
    let (lo, hi) = imag.index_bounds(TAU);
    (lo..=hi)
        .filter(|&k| k != 0)
        .map(|k| Complex::from_imag(TAU * k as f64))
        .collect()
}

/// π/2 的奇數倍，都在實軸上
fn tan_poles(real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    let (lo, hi) = real.index_bounds(FRAC_PI_2);
    (lo..=hi)
        .filter(|k| k % 2 != 0)
        .map(|k| Complex::from_real(FRAC_PI_2 * k as f64))
        .collect()
}

/// kπ, k ≠ 0（k = 0 可去）
fn z_over_sin_poles(real: AxisRange, _imag: AxisRange) -> Vec<Complex> {
    let (lo, hi) = real.index_bounds(PI);
    (lo..=hi)
        .filter(|&k| k != 0)
        .map(|k| Complex::from_real(PI * k as f64))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// value / diff
// ─────────────────────────────────────────────────────────────────────────────

fn square_value(z: Complex) -> Complex {
    z.square()
}

fn square_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.square()
}

fn recip_value(z: Complex) -> Complex {
    z.recip()
}

fn recip_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.recip()
}

fn recip_square_value(z: Complex) -> Complex {
    z.square().recip()
}

fn recip_square_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.square().recip()
}

fn two_poles_value(z: Complex) -> Complex {
    (z.square() - Complex::ONE).recip()
}

fn two_poles_diff(z: Jet<Complex>) -> Jet<Complex> {
    (z.square() - Jet::one()).recip()
}

fn cube_roots_value(z: Complex) -> Complex {
    (z.powi(3) - Complex::ONE).recip()
}

fn cube_roots_diff(z: Jet<Complex>) -> Jet<Complex> {
    (z.powi(3) - Jet::one()).recip()
}

fn exp_recip_value(z: Complex) -> Complex {
    z.recip().exp()
}

fn exp_recip_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.recip().exp()
}

// z/(e^z - 1) 在 0 的極限為 1，導數為 -1/2。
fn bernoulli_value(z: Complex) -> Complex {
    if z == Complex::ZERO {
        return Complex::ONE;
    }
    z / z.exp_m1()
}

fn bernoulli_diff(z: Jet<Complex>) -> Jet<Complex> {
    if z.value == Complex::ZERO {
        return Jet::new(Complex::ONE, z.diff.mul_real(-0.5));
    }
    z / z.exp_m1()
}

fn tan_value(z: Complex) -> Complex {
    z.tan()
}

fn tan_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.tan()
}

// z/sin(z) 為偶函數，在 0 的值為 1、導數為 0。
fn z_over_sin_value(z: Complex) -> Complex {
    if z == Complex::ZERO {
        return Complex::ONE;
    }
    z / z.sin()
}

fn z_over_sin_diff(z: Jet<Complex>) -> Jet<Complex> {
    if z.value == Complex::ZERO {
        return Jet::one();
    }
    z / z.sin()
}

// 以下兩項不是全純函數，用來示範非零的閉路積分。
fn conj_value(z: Complex) -> Complex {
    z.conj()
}

fn conj_diff(z: Jet<Complex>) -> Jet<Complex> {
    z.conj()
}

fn real_part_value(z: Complex) -> Complex {
    Complex::from_real(z.x)
}

fn real_part_diff(z: Jet<Complex>) -> Jet<Complex> {
    Jet::from_real(z.real_part())
}
