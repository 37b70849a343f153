//! Logical and null-handling entries.
//!
//! AND/OR/NOT follow SQL three-valued logic: a null operand is "unknown",
//! and only short-circuits when the other operand already decides the
//! result (AND with false, OR with true). `not_null` and `coalesce` are the
//! two entries that look at null without propagating it.

use crate::error::{ScriptError, ScriptResult};
use crate::registry::comparison;
use crate::scalar::Scalar;

pub fn and(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    let result = match (tribool(left)?, tribool(right)?) {
        (Some(false), _) | (_, Some(false)) => Scalar::Bool(false),
        (Some(true), Some(true)) => Scalar::Bool(true),
        _ => Scalar::Null,
    };
    Ok(result)
}

pub fn or(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    let result = match (tribool(left)?, tribool(right)?) {
        (Some(true), _) | (_, Some(true)) => Scalar::Bool(true),
        (Some(false), Some(false)) => Scalar::Bool(false),
        _ => Scalar::Null,
    };
    Ok(result)
}

pub fn not(value: &Scalar) -> ScriptResult<Scalar> {
    let result = match tribool(value)? {
        Some(b) => Scalar::Bool(!b),
        None => Scalar::Null,
    };
    Ok(result)
}

/// IS NOT NULL. Always yields a definite boolean, never null.
pub fn not_null(value: &Scalar) -> ScriptResult<Scalar> {
    Ok(Scalar::Bool(!value.is_null()))
}

/// SQL IN semantics: true on a match; if no match was found but the probe
/// or any list element was null, the outcome is unknown, so null.
pub fn is_in(value: &Scalar, list: &[Scalar]) -> ScriptResult<Scalar> {
    if value.is_null() {
        return Ok(Scalar::Null);
    }
    let mut saw_null = false;
    for item in list {
        match comparison::eq(value, item)? {
            Scalar::Bool(true) => return Ok(Scalar::Bool(true)),
            Scalar::Null => saw_null = true,
            _ => {}
        }
    }
    Ok(if saw_null {
        Scalar::Null
    } else {
        Scalar::Bool(false)
    })
}

/// First non-null element of the list, or null if all are null.
pub fn coalesce(values: &[Scalar]) -> ScriptResult<Scalar> {
    Ok(values
        .iter()
        .find(|v| !v.is_null())
        .cloned()
        .unwrap_or(Scalar::Null))
}

fn tribool(value: &Scalar) -> ScriptResult<Option<bool>> {
    match value {
        Scalar::Null => Ok(None),
        Scalar::Bool(b) => Ok(Some(*b)),
        other => Err(ScriptError::TypeError(format!(
            "Expected a boolean, got {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Scalar = Scalar::Bool(true);
    const F: Scalar = Scalar::Bool(false);
    const N: Scalar = Scalar::Null;

    #[test]
    fn test_three_valued_and() {
        assert_eq!(and(&N, &F).unwrap(), F);
        assert_eq!(and(&F, &N).unwrap(), F);
        assert_eq!(and(&N, &T).unwrap(), N);
        assert_eq!(and(&N, &N).unwrap(), N);
        assert_eq!(and(&T, &T).unwrap(), T);
    }

    #[test]
    fn test_three_valued_or() {
        assert_eq!(or(&N, &T).unwrap(), T);
        assert_eq!(or(&T, &N).unwrap(), T);
        assert_eq!(or(&N, &F).unwrap(), N);
        assert_eq!(or(&N, &N).unwrap(), N);
        assert_eq!(or(&F, &F).unwrap(), F);
    }

    #[test]
    fn test_not() {
        assert_eq!(not(&T).unwrap(), F);
        assert_eq!(not(&F).unwrap(), T);
        assert_eq!(not(&N).unwrap(), N);
    }

    #[test]
    fn test_not_null() {
        assert_eq!(not_null(&N).unwrap(), F);
        assert_eq!(not_null(&Scalar::Int(0)).unwrap(), T);
        assert_eq!(not_null(&F).unwrap(), T);
    }

    #[test]
    fn test_non_boolean_operand_errors() {
        assert!(and(&Scalar::Int(1), &T).is_err());
        assert!(not(&Scalar::Text("x".into())).is_err());
    }

    #[test]
    fn test_in() {
        let list = [Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)];
        assert_eq!(is_in(&Scalar::Int(2), &list).unwrap(), T);
        assert_eq!(is_in(&Scalar::Int(5), &list).unwrap(), F);

        let with_null = [Scalar::Int(1), N];
        assert_eq!(is_in(&Scalar::Int(1), &with_null).unwrap(), T);
        assert_eq!(is_in(&Scalar::Int(9), &with_null).unwrap(), N);
        assert_eq!(is_in(&N, &list).unwrap(), N);
    }

    #[test]
    fn test_coalesce() {
        assert_eq!(
            coalesce(&[N, N, Scalar::Int(5), N]).unwrap(),
            Scalar::Int(5)
        );
        assert_eq!(coalesce(&[N, N]).unwrap(), N);
        assert_eq!(coalesce(&[]).unwrap(), N);
    }

    #[test]
    fn test_not_null_of_coalesce() {
        let first = coalesce(&[N, Scalar::Int(7)]).unwrap();
        assert_eq!(not_null(&first).unwrap(), T);
    }
}
