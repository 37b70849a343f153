//! Regex match entry.
//!
//! The match is anchored: the pattern must cover the whole input, per SQL
//! RLIKE semantics. A null value or pattern yields null, never false.

use regex::Regex;

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

const MAX_PATTERN_LEN: usize = 1000;

/// Full-string regex match.
pub fn regex(value: &Scalar, pattern: &Scalar) -> ScriptResult<Scalar> {
    if value.is_null() || pattern.is_null() {
        return Ok(Scalar::Null);
    }
    let s = text(value)?;
    let p = text(pattern)?;
    Ok(Scalar::Bool(compile(p)?.is_match(s)))
}

fn compile(pattern: &str) -> ScriptResult<Regex> {
    // Cap pattern size before handing it to the engine.
    if pattern.len() > MAX_PATTERN_LEN {
        return Err(ScriptError::InvalidArgument(format!(
            "Pattern too long (max {} chars)",
            MAX_PATTERN_LEN
        )));
    }
    Regex::new(&format!(r"\A(?:{})\z", pattern))
        .map_err(|e| ScriptError::InvalidArgument(format!("Invalid pattern: {}", e)))
}

fn text(value: &Scalar) -> ScriptResult<&str> {
    value.as_str().ok_or_else(|| {
        ScriptError::TypeError(format!("regex: expected text, got {}", value.type_name()))
    })
}
