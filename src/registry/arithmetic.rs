//! Arithmetic entries.
//!
//! A null operand makes the whole result null. Two integer operands keep
//! integer class with checked arithmetic; any float operand promotes the
//! operation to floats.

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

enum Operands {
    Missing,
    Ints(i64, i64),
    Floats(f64, f64),
}

pub fn add(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    match operands(left, right, "add")? {
        Operands::Missing => Ok(Scalar::Null),
        Operands::Ints(a, b) => checked(a.checked_add(b)),
        Operands::Floats(a, b) => Ok(Scalar::Float(a + b)),
    }
}

pub fn sub(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    match operands(left, right, "sub")? {
        Operands::Missing => Ok(Scalar::Null),
        Operands::Ints(a, b) => checked(a.checked_sub(b)),
        Operands::Floats(a, b) => Ok(Scalar::Float(a - b)),
    }
}

pub fn mul(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    match operands(left, right, "mul")? {
        Operands::Missing => Ok(Scalar::Null),
        Operands::Ints(a, b) => checked(a.checked_mul(b)),
        Operands::Floats(a, b) => Ok(Scalar::Float(a * b)),
    }
}

pub fn div(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    match operands(left, right, "div")? {
        Operands::Missing => Ok(Scalar::Null),
        Operands::Ints(_, 0) => Err(ScriptError::InvalidArgument(
            "Division by zero".to_string(),
        )),
        Operands::Ints(a, b) => checked(a.checked_div(b)),
        // Float division follows IEEE: x / 0.0 is an infinity, not an error.
        Operands::Floats(a, b) => Ok(Scalar::Float(a / b)),
    }
}

pub fn modulo(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    match operands(left, right, "mod")? {
        Operands::Missing => Ok(Scalar::Null),
        Operands::Ints(_, 0) => Err(ScriptError::InvalidArgument(
            "Division by zero".to_string(),
        )),
        Operands::Ints(a, b) => checked(a.checked_rem(b)),
        Operands::Floats(a, b) => Ok(Scalar::Float(a % b)),
    }
}

pub fn neg(value: &Scalar) -> ScriptResult<Scalar> {
    match value {
        Scalar::Null => Ok(Scalar::Null),
        Scalar::Int(n) => checked(n.checked_neg()),
        Scalar::Float(f) => Ok(Scalar::Float(-f)),
        other => Err(ScriptError::TypeError(format!(
            "neg: expected a number, got {}",
            other.type_name()
        ))),
    }
}

fn operands(left: &Scalar, right: &Scalar, func: &str) -> ScriptResult<Operands> {
    if left.is_null() || right.is_null() {
        return Ok(Operands::Missing);
    }
    match (left, right) {
        (Scalar::Int(a), Scalar::Int(b)) => Ok(Operands::Ints(*a, *b)),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => Ok(Operands::Floats(a, b)),
            _ => Err(ScriptError::TypeError(format!(
                "{}: expected numbers, got {} and {}",
                func,
                left.type_name(),
                right.type_name()
            ))),
        },
    }
}

fn checked(result: Option<i64>) -> ScriptResult<Scalar> {
    result.map(Scalar::Int).ok_or_else(|| {
        ScriptError::InvalidArgument("Integer arithmetic overflow".to_string())
    })
}
