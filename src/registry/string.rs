//! String entries.
//!
//! Positions and counts are 1-based and character-indexed (never bytes,
//! except the explicit byte-width entries `bit_length`/`octet_length`).
//! Any null string or count operand makes the result null.

use crate::error::{ScriptError, ScriptResult};
use crate::scalar::Scalar;

/// Code point of the first character, or null for an empty string.
pub fn ascii(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "ascii")? else {
        return Ok(Scalar::Null);
    };
    Ok(match s.chars().next() {
        Some(c) => Scalar::Int(c as i64),
        None => Scalar::Null,
    })
}

pub fn bit_length(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "bitLength")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Int((s.len() * 8) as i64))
}

/// Character for a code point, or null for an invalid one.
pub fn character(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(n) = integer(value, "character")? else {
        return Ok(Scalar::Null);
    };
    let ch = u32::try_from(n).ok().and_then(char::from_u32);
    Ok(match ch {
        Some(c) => Scalar::Text(c.to_string()),
        None => Scalar::Null,
    })
}

pub fn char_length(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "charLength")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Int(s.chars().count() as i64))
}

pub fn concat(left: &Scalar, right: &Scalar) -> ScriptResult<Scalar> {
    let Some(a) = text(left, "concat")? else {
        return Ok(Scalar::Null);
    };
    let Some(b) = text(right, "concat")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(format!("{}{}", a, b)))
}

/// Replace `length` characters of `source` at 1-based `start` with
/// `replacement`. A start outside [1, len + 1] returns the source unchanged.
pub fn insert(
    source: &Scalar,
    start: &Scalar,
    length: &Scalar,
    replacement: &Scalar,
) -> ScriptResult<Scalar> {
    let Some(s) = text(source, "insert")? else {
        return Ok(Scalar::Null);
    };
    let Some(start) = integer(start, "insert")? else {
        return Ok(Scalar::Null);
    };
    let Some(length) = integer(length, "insert")? else {
        return Ok(Scalar::Null);
    };
    let Some(r) = text(replacement, "insert")? else {
        return Ok(Scalar::Null);
    };

    let chars: Vec<char> = s.chars().collect();
    if start < 1 || start as usize > chars.len() + 1 {
        return Ok(Scalar::Text(s.to_string()));
    }
    let begin = (start - 1) as usize;
    let end = (begin as i64)
        .saturating_add(length.max(0))
        .min(chars.len() as i64) as usize;

    let mut result: String = chars[..begin].iter().collect();
    result.push_str(r);
    result.extend(&chars[end..]);
    Ok(Scalar::Text(result))
}

pub fn lcase(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "lcase")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(s.to_lowercase()))
}

pub fn left(value: &Scalar, count: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "left")? else {
        return Ok(Scalar::Null);
    };
    let Some(n) = integer(count, "left")? else {
        return Ok(Scalar::Null);
    };
    if n <= 0 {
        return Ok(Scalar::Text(String::new()));
    }
    Ok(Scalar::Text(s.chars().take(n as usize).collect()))
}

/// Character length with trailing whitespace removed (ODBC LENGTH).
pub fn length(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "length")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Int(s.trim_end().chars().count() as i64))
}

/// 1-based position of `pattern` in `source`, or 0 when absent.
pub fn locate(pattern: &Scalar, source: &Scalar) -> ScriptResult<Scalar> {
    locate_from(pattern, source, &Scalar::Null)
}

/// Like [`locate`], starting the search at 1-based `start`. A null start is
/// equivalent to the two-argument form.
pub fn locate_from(pattern: &Scalar, source: &Scalar, start: &Scalar) -> ScriptResult<Scalar> {
    let Some(p) = text(pattern, "locate")? else {
        return Ok(Scalar::Null);
    };
    let Some(s) = text(source, "locate")? else {
        return Ok(Scalar::Null);
    };
    let from = match integer(start, "locate")? {
        Some(n) => (n.max(1) - 1) as usize,
        None => 0,
    };

    let tail: String = s.chars().skip(from).collect();
    Ok(match tail.find(p) {
        Some(byte_idx) => {
            let char_idx = tail[..byte_idx].chars().count();
            Scalar::Int((from + char_idx + 1) as i64)
        }
        None => Scalar::Int(0),
    })
}

pub fn ltrim(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "ltrim")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(s.trim_start().to_string()))
}

pub fn octet_length(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "octetLength")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Int(s.len() as i64))
}

/// 1-based position of `needle` in `haystack`, or 0 when absent.
pub fn position(needle: &Scalar, haystack: &Scalar) -> ScriptResult<Scalar> {
    locate_from(needle, haystack, &Scalar::Null)
}

/// `source` repeated `count` times; a non-positive count yields null.
pub fn repeat(value: &Scalar, count: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "repeat")? else {
        return Ok(Scalar::Null);
    };
    let Some(n) = integer(count, "repeat")? else {
        return Ok(Scalar::Null);
    };
    if n <= 0 {
        return Ok(Scalar::Null);
    }
    Ok(Scalar::Text(s.repeat(n as usize)))
}

pub fn replace(source: &Scalar, search: &Scalar, replacement: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(source, "replace")? else {
        return Ok(Scalar::Null);
    };
    let Some(from) = text(search, "replace")? else {
        return Ok(Scalar::Null);
    };
    let Some(to) = text(replacement, "replace")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(s.replace(from, to)))
}

pub fn right(value: &Scalar, count: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "right")? else {
        return Ok(Scalar::Null);
    };
    let Some(n) = integer(count, "right")? else {
        return Ok(Scalar::Null);
    };
    if n <= 0 {
        return Ok(Scalar::Text(String::new()));
    }
    let total = s.chars().count();
    Ok(Scalar::Text(
        s.chars().skip(total.saturating_sub(n as usize)).collect(),
    ))
}

pub fn rtrim(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "rtrim")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(s.trim_end().to_string()))
}

/// A string of `count` spaces; a negative count yields null.
pub fn space(count: &Scalar) -> ScriptResult<Scalar> {
    let Some(n) = integer(count, "space")? else {
        return Ok(Scalar::Null);
    };
    if n < 0 {
        return Ok(Scalar::Null);
    }
    Ok(Scalar::Text(" ".repeat(n as usize)))
}

/// `length` characters of `source` from 1-based `start`, clamped to the
/// string's bounds.
pub fn substring(source: &Scalar, start: &Scalar, length: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(source, "substring")? else {
        return Ok(Scalar::Null);
    };
    let Some(start) = integer(start, "substring")? else {
        return Ok(Scalar::Null);
    };
    let Some(length) = integer(length, "substring")? else {
        return Ok(Scalar::Null);
    };

    let chars: Vec<char> = s.chars().collect();
    let total = chars.len() as i64;
    let begin = (start - 1).clamp(0, total);
    let end = begin.saturating_add(length.max(0)).min(total);
    Ok(Scalar::Text(
        chars[begin as usize..end as usize].iter().collect(),
    ))
}

pub fn ucase(value: &Scalar) -> ScriptResult<Scalar> {
    let Some(s) = text(value, "ucase")? else {
        return Ok(Scalar::Null);
    };
    Ok(Scalar::Text(s.to_uppercase()))
}

fn text<'a>(value: &'a Scalar, func: &str) -> ScriptResult<Option<&'a str>> {
    match value {
        Scalar::Null => Ok(None),
        Scalar::Text(s) => Ok(Some(s)),
        other => Err(ScriptError::TypeError(format!(
            "{}: expected text, got {}",
            func,
            other.type_name()
        ))),
    }
}

fn integer(value: &Scalar, func: &str) -> ScriptResult<Option<i64>> {
    match value {
        Scalar::Null => Ok(None),
        other => other.as_int().map(Some).ok_or_else(|| {
            ScriptError::TypeError(format!(
                "{}: expected an integer, got {}",
                func,
                other.type_name()
            ))
        }),
    }
}
