//! The whitelisted scalar-function registry.
//!
//! Every function a compiled expression script may call lives here, one
//! thin named entry per SQL scalar function or operator. Each entry applies
//! its category's null-propagation rule before delegating to the category's
//! processor. All entries are pure and stateless (except `random`), so they
//! are safe to invoke from any number of threads at once.
//!
//! The sort-key and filter materialization helpers below follow a
//! different, deliberately non-propagating rule: they turn null into a
//! definite value (0.0, "", false) and are reserved for order-by and final
//! filter stages. They must not be used for ordinary operator evaluation.

pub mod arithmetic;
pub mod catalog;
pub mod comparison;
pub mod datetime;
pub mod logic;
pub mod math;
pub mod pattern;
pub mod string;

pub use arithmetic::{add, div, modulo, mul, neg, sub};
pub use catalog::{entries, invoke, lookup, Arity, Category, RegistryEntry};
pub use comparison::{eq, gt, gte, lt, lte, neq};
pub use datetime::{date_time_chrono, day_name, month_name, quarter};
pub use logic::{and, coalesce, is_in, not, not_null, or};
pub use math::{
    abs, acos, asin, atan, cbrt, ceil, cos, cosh, cot, degrees, e, exp, expm1, floor, log, log10,
    pi, radians, random, round, sign, sin, sinh, sqrt, tan, truncate,
};
pub use pattern::regex;
pub use string::{
    ascii, bit_length, char_length, character, concat, insert, lcase, left, length, locate,
    locate_from, ltrim, octet_length, position, repeat, replace, right, rtrim, space, substring,
    ucase,
};

use crate::scalar::Scalar;

/// Materialize a filter predicate: a null predicate excludes the document.
#[inline]
pub fn null_safe_filter(predicate: &Scalar) -> bool {
    matches!(predicate, Scalar::Bool(true))
}

/// Materialize a numeric sort key: null sorts as 0.0.
#[inline]
pub fn null_safe_sort_numeric(sort: &Scalar) -> f64 {
    sort.as_f64().unwrap_or(0.0)
}

/// Materialize a text sort key: null sorts as the empty string.
#[inline]
pub fn null_safe_sort_string(sort: &Scalar) -> String {
    match sort {
        Scalar::Null => String::new(),
        other => other.to_string(),
    }
}
