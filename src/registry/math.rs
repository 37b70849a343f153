//! Math entries: the unary trigonometric/exponential family plus scaled
//! ROUND and TRUNCATE.
//!
//! Every unary entry returns a float or null. ROUND and TRUNCATE keep the
//! class of their input: integer inputs stay integers (exact i128
//! arithmetic), float inputs stay floats.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

pub fn abs(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "abs", f64::abs)
}

pub fn acos(value: &Scalar) -> ScriptResult<Scalar> {
    unary_in_domain(value, "acos", |n| (-1.0..=1.0).contains(&n), f64::acos)
}

pub fn asin(value: &Scalar) -> ScriptResult<Scalar> {
    unary_in_domain(value, "asin", |n| (-1.0..=1.0).contains(&n), f64::asin)
}

pub fn atan(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "atan", f64::atan)
}

pub fn cbrt(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "cbrt", f64::cbrt)
}

pub fn ceil(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "ceil", f64::ceil)
}

pub fn cos(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "cos", f64::cos)
}

pub fn cosh(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "cosh", f64::cosh)
}

pub fn cot(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "cot", |n| 1.0 / n.tan())
}

pub fn degrees(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "degrees", f64::to_degrees)
}

pub fn exp(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "exp", f64::exp)
}

pub fn expm1(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "expm1", f64::exp_m1)
}

pub fn floor(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "floor", f64::floor)
}

pub fn log(value: &Scalar) -> ScriptResult<Scalar> {
    unary_in_domain(value, "log", |n| n > 0.0, f64::ln)
}

pub fn log10(value: &Scalar) -> ScriptResult<Scalar> {
    unary_in_domain(value, "log10", |n| n > 0.0, f64::log10)
}

pub fn radians(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "radians", f64::to_radians)
}

pub fn sign(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "sign", |n| {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    })
}

pub fn sin(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "sin", f64::sin)
}

pub fn sinh(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "sinh", f64::sinh)
}

pub fn sqrt(value: &Scalar) -> ScriptResult<Scalar> {
    unary_in_domain(value, "sqrt", |n| n >= 0.0, f64::sqrt)
}

pub fn tan(value: &Scalar) -> ScriptResult<Scalar> {
    unary(value, "tan", f64::tan)
}

pub fn pi() -> ScriptResult<Scalar> {
    Ok(Scalar::Float(std::f64::consts::PI))
}

pub fn e() -> ScriptResult<Scalar> {
    Ok(Scalar::Float(std::f64::consts::E))
}

/// Random draw in [0, 1). A numeric seed makes the draw deterministic for
/// that seed; a null seed uses the thread RNG. Two calls with a null seed
/// are not expected to agree.
pub fn random(seed: &Scalar) -> ScriptResult<Scalar> {
    match seed {
        Scalar::Null => Ok(Scalar::Float(rand::thread_rng().gen::<f64>())),
        _ => {
            let n = seed.as_f64().ok_or_else(|| {
                ScriptError::TypeError(format!(
                    "random: expected a numeric seed, got {}",
                    seed.type_name()
                ))
            })?;
            let mut rng = StdRng::seed_from_u64(n as i64 as u64);
            Ok(Scalar::Float(rng.gen::<f64>()))
        }
    }
}

/// Round half away from zero at `scale` decimal digits. A negative scale
/// rounds to the left of the decimal point.
pub fn round(value: &Scalar, scale: &Scalar) -> ScriptResult<Scalar> {
    scaled(value, scale, "round", true)
}

/// Drop digits beyond `scale` decimal digits, toward zero.
pub fn truncate(value: &Scalar, scale: &Scalar) -> ScriptResult<Scalar> {
    scaled(value, scale, "truncate", false)
}

fn scaled(value: &Scalar, scale: &Scalar, func: &str, half_up: bool) -> ScriptResult<Scalar> {
    if value.is_null() || scale.is_null() {
        return Ok(Scalar::Null);
    }
    let digits = scale.as_int().ok_or_else(|| {
        ScriptError::TypeError(format!(
            "{}: scale must be an integer, got {}",
            func,
            scale.type_name()
        ))
    })?;

    match value {
        Scalar::Int(n) => {
            if digits >= 0 {
                return Ok(Scalar::Int(*n));
            }
            scaled_integer(*n, -digits, half_up)
        }
        Scalar::Float(f) => {
            // Beyond f64 precision the scaling factor degenerates; clamp.
            let factor = 10f64.powi(digits.clamp(-308, 308) as i32);
            let scaled = f * factor;
            let adjusted = if half_up { scaled.round() } else { scaled.trunc() };
            Ok(Scalar::Float(adjusted / factor))
        }
        other => Err(ScriptError::TypeError(format!(
            "{}: expected a number, got {}",
            func,
            other.type_name()
        ))),
    }
}

fn scaled_integer(n: i64, digits: i64, half_up: bool) -> ScriptResult<Scalar> {
    // 10^19 exceeds any i64 magnitude, so everything rounds to zero.
    if digits >= 19 {
        return Ok(Scalar::Int(0));
    }
    let factor = 10i128.pow(digits as u32);
    let v = n as i128;
    let adjusted = if half_up {
        let half = factor / 2;
        if v < 0 {
            v - half
        } else {
            v + half
        }
    } else {
        v
    };
    let result = (adjusted / factor) * factor;
    i64::try_from(result).map(Scalar::Int).map_err(|_| {
        ScriptError::InvalidArgument("Integer arithmetic overflow".to_string())
    })
}

fn unary(value: &Scalar, func: &str, f: impl FnOnce(f64) -> f64) -> ScriptResult<Scalar> {
    match value {
        Scalar::Null => Ok(Scalar::Null),
        _ => {
            let n = numeric(value, func)?;
            Ok(Scalar::Float(f(n)))
        }
    }
}

fn unary_in_domain(
    value: &Scalar,
    func: &str,
    domain: impl FnOnce(f64) -> bool,
    f: impl FnOnce(f64) -> f64,
) -> ScriptResult<Scalar> {
    match value {
        Scalar::Null => Ok(Scalar::Null),
        _ => {
            let n = numeric(value, func)?;
            if !domain(n) {
                return Err(ScriptError::InvalidArgument(format!(
                    "{}: argument {} is out of domain",
                    func, n
                )));
            }
            Ok(Scalar::Float(f(n)))
        }
    }
}

fn numeric(value: &Scalar, func: &str) -> ScriptResult<f64> {
    value.as_f64().ok_or_else(|| {
        ScriptError::TypeError(format!(
            "{}: expected a number, got {}",
            func,
            value.type_name()
        ))
    })
}
