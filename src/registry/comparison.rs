//! Comparison entries.
//!
//! All comparisons propagate null: if either operand is the logical null,
//! the result is null, never false. `NULL = NULL` is null.

use std::cmp::Ordering;

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

pub fn eq(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    if left.is_null() || right.is_null() {
        return Ok(Scalar::Null);
    }
    Ok(Scalar::Bool(values_equal(left, right)))
}

pub fn neq(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    if left.is_null() || right.is_null() {
        return Ok(Scalar::Null);
    }
    Ok(Scalar::Bool(!values_equal(left, right)))
}

pub fn lt(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    ordered(left, right, |o| o == Ordering::Less)
}

pub fn lte(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    ordered(left, right, |o| o != Ordering::Greater)
}

pub fn gt(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    ordered(left, right, |o| o == Ordering::Greater)
}

pub fn gte(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    ordered(left, right, |o| o != Ordering::Less)
}

/// Equality across the scalar types. Numbers compare by value regardless
/// of integer/float class; otherwise mismatched types are simply unequal.
pub(crate) fn values_equal(left: &Scalar, right: &Scalar) -> bool {
    match (left, right) {
        (Scalar::Int(a), Scalar::Int(b)) => a == b,
        (Scalar::Float(a), Scalar::Float(b)) => a == b,
        (Scalar::Int(a), Scalar::Float(b)) | (Scalar::Float(b), Scalar::Int(a)) => *a as f64 == *b,
        (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
        (Scalar::Text(a), Scalar::Text(b)) => a == b,
        (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a == b,
        _ => false,
    }
}

fn ordered(
    left: &Scalar,
    right: &Scalar,
    test: impl FnOnce(Ordering) -> bool,
) -> ScriptResult<Scalar> {
    if left.is_null() || right.is_null() {
        return Ok(Scalar::Null);
    }
    Ok(Scalar::Bool(test(compare(left, right)?)))
}

fn compare(left: &Scalar, right: &Scalar) -> ScriptResult<Ordering> {
    let ordering = match (left, right) {
        (Scalar::Int(a), Scalar::Int(b)) => a.cmp(b),
        (Scalar::Bool(a), Scalar::Bool(b)) => a.cmp(b),
        (Scalar::Text(a), Scalar::Text(b)) => a.cmp(b),
        (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a.cmp(b),
        _ => {
            if let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            } else {
                return Err(ScriptError::TypeError(format!(
                    "Cannot compare {} with {}",
                    left.type_name(),
                    right.type_name()
                )));
            }
        }
    };
    Ok(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_propagation() {
        let ops: [fn(&Scalar, &Scalar) -> ScriptResult<Scalar>; 6] = [eq, neq, lt, lte, gt, gte];
        for op in ops {
            assert_eq!(op(&Scalar::Null, &Scalar::Int(1)).unwrap(), Scalar::Null);
            assert_eq!(op(&Scalar::Int(1), &Scalar::Null).unwrap(), Scalar::Null);
            assert_eq!(op(&Scalar::Null, &Scalar::Null).unwrap(), Scalar::Null);
        }
    }

    #[test]
    fn test_eq_numeric_classes() {
        assert_eq!(
            eq(&Scalar::Int(2), &Scalar::Float(2.0)).unwrap(),
            Scalar::Bool(true)
        );
        assert_eq!(
            neq(&Scalar::Int(2), &Scalar::Float(2.5)).unwrap(),
            Scalar::Bool(true)
        );
    }

    #[test]
    fn test_eq_mismatched_types() {
        assert_eq!(
            eq(&Scalar::Int(1), &Scalar::Text("1".into())).unwrap(),
            Scalar::Bool(false)
        );
    }

    #[test]
    fn test_ordering() {
        assert_eq!(
            lt(&Scalar::Int(1), &Scalar::Int(2)).unwrap(),
            Scalar::Bool(true)
        );
        assert_eq!(
            gte(&Scalar::Float(2.0), &Scalar::Int(2)).unwrap(),
            Scalar::Bool(true)
        );
        assert_eq!(
            gt(&Scalar::Text("b".into()), &Scalar::Text("a".into())).unwrap(),
            Scalar::Bool(true)
        );
    }

    #[test]
    fn test_incomparable_types_error() {
        let err = lt(&Scalar::Bool(true), &Scalar::Text("a".into())).unwrap_err();
        assert!(err.to_string().contains("Cannot compare"));
    }
}
