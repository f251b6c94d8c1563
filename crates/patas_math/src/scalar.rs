//! Scalar functions that do not depend on the platform math library
//!
//! `sqrt` is a Newton-Raphson (Heron) iteration and `sin` is a Taylor series,
//! so results are identical on every target. `cos` and `tan` are derived
//! from `sin`.

/// Archimedes' constant
pub const PI: f32 = std::f32::consts::PI;

/// Euler's number
pub const E: f32 = std::f32::consts::E;

/// Convergence bound for [`sqrt`]
pub const SQRT_EPSILON: f32 = 0.00001;

/// A Taylor term smaller than this ends the [`sin`] series
pub const SERIES_EPSILON: f32 = 1e-6;

// Very large or very small inputs spend a while halving before the
// quadratic phase kicks in; this bounds the loop for anything an f32 holds.
const SQRT_MAX_ITERATIONS: u32 = 256;

/// Square root by Newton-Raphson iteration
///
/// Iterates `x = (x + y) / 2, y = value / x` until `|x - y| <= 1e-5`.
/// The iteration runs in f64 so the bound is reachable for large inputs.
/// Negative (and NaN) input returns 0 instead of failing.
pub fn sqrt(value: f32) -> f32 {
    if !(value > 0.0) {
        return 0.0;
    }
    if value.is_infinite() {
        return value;
    }

    let target = f64::from(value);
    let epsilon = f64::from(SQRT_EPSILON);
    let mut x = target;
    let mut y = 1.0_f64;
    let mut iterations = 0;
    while (x - y).abs() > epsilon && iterations < SQRT_MAX_ITERATIONS {
        x = (x + y) / 2.0;
        y = target / x;
        iterations += 1;
    }
    x as f32
}

/// Sine of an angle in radians, by Taylor series
///
/// Terms are summed until one drops below 1e-6 in magnitude. Angles outside
/// [-2π, 2π] are wrapped first so the series never overflows. Infinite and
/// NaN input returns NaN.
pub fn sin(angle: f32) -> f32 {
    if !angle.is_finite() {
        return f32::NAN;
    }
    let angle = wrap_angle(angle);
    let angle_squared = angle * angle;
    let mut result = 0.0_f32;
    let mut term = angle;
    let mut n = 1.0_f32;
    while term > SERIES_EPSILON || term < -SERIES_EPSILON {
        result += term;
        term *= -angle_squared / ((2.0 * n) * (2.0 * n + 1.0));
        n += 1.0;
    }
    result
}

/// Cosine of an angle in radians, as `sin(angle + π/2)`
#[inline]
pub fn cos(angle: f32) -> f32 {
    sin(angle + PI / 2.0)
}

/// Tangent of an angle in radians
///
/// Returns 0 when the cosine is exactly 0, so values at the asymptotes are
/// wrong rather than infinite.
pub fn tan(angle: f32) -> f32 {
    let s = sin(angle);
    let c = cos(angle);
    if c != 0.0 {
        s / c
    } else {
        0.0
    }
}

/// Convert degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

fn wrap_angle(angle: f32) -> f32 {
    let full_turn = 2.0 * PI;
    if angle.abs() <= full_turn {
        return angle;
    }
    let wrapped = angle.rem_euclid(full_turn);
    if wrapped > PI {
        wrapped - full_turn
    } else {
        wrapped
    }
}
