//! Static whitelist of scalar functions.
//!
//! The catalog maps every host-visible function name to a validated entry
//! with a fixed category and arity. It is built once, never mutated, and is
//! the only dispatch surface a compiled script may go through: a name that
//! is not in this table cannot be called.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{ScriptError, ScriptResult};
use crate::registry::{arithmetic, comparison, datetime, logic, math, pattern, string};
use crate::scalar::Scalar;

/// Operation categories. Each category carries its own null-propagation
/// rule, applied inside the entry functions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Comparison,
    Logical,
    NullHandling,
    Regex,
    Arithmetic,
    RoundingMath,
    UnaryMath,
    DateTimeExtraction,
    StringTransform,
}

/// Accepted argument counts for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Range(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::Range(min, max) => write!(f, "{}-{}", min, max),
            Arity::AtLeast(min) => write!(f, "at least {}", min),
        }
    }
}

type EntryFn = fn(&[Scalar]) -> ScriptResult<Scalar>;

/// One whitelisted, pure, fixed-arity scalar function.
pub struct RegistryEntry {
    name: &'static str,
    category: Category,
    arity: Arity,
    func: EntryFn,
}

impl RegistryEntry {
    const fn new(name: &'static str, category: Category, arity: Arity, func: EntryFn) -> Self {
        Self {
            name,
            category,
            arity,
            func,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Check arity, then dispatch. An argument-count mismatch is a
    /// contract violation by the expression compiler, not a null.
    pub fn invoke(&self, args: &[Scalar]) -> ScriptResult<Scalar> {
        if !self.arity.accepts(args.len()) {
            return Err(ScriptError::ArityError(format!(
                "{} expects {} argument(s), got {}",
                self.name,
                self.arity,
                args.len()
            )));
        }
        (self.func)(args)
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Look up a whitelisted function by name.
pub fn lookup(name: &str) -> ScriptResult<&'static RegistryEntry> {
    CATALOG
        .get(name)
        .ok_or_else(|| ScriptError::UnknownFunction(name.to_string()))
}

/// Look up and invoke in one step.
pub fn invoke(name: &str, args: &[Scalar]) -> ScriptResult<Scalar> {
    lookup(name)?.invoke(args)
}

/// All whitelisted entries, in no particular order.
pub fn entries() -> impl Iterator<Item = &'static RegistryEntry> {
    CATALOG.values()
}

static CATALOG: Lazy<HashMap<&'static str, RegistryEntry>> = Lazy::new(build);

fn build() -> HashMap<&'static str, RegistryEntry> {
    use Arity::{AtLeast, Exact, Range};
    use Category::*;

    let entries = [
        // Comparison
        RegistryEntry::new("eq", Comparison, Exact(2), |a| comparison::eq(&a[0], &a[1])),
        RegistryEntry::new("neq", Comparison, Exact(2), |a| {
            comparison::neq(&a[0], &a[1])
        }),
        RegistryEntry::new("lt", Comparison, Exact(2), |a| comparison::lt(&a[0], &a[1])),
        RegistryEntry::new("lte", Comparison, Exact(2), |a| {
            comparison::lte(&a[0], &a[1])
        }),
        RegistryEntry::new("gt", Comparison, Exact(2), |a| comparison::gt(&a[0], &a[1])),
        RegistryEntry::new("gte", Comparison, Exact(2), |a| {
            comparison::gte(&a[0], &a[1])
        }),
        // Logical
        RegistryEntry::new("and", Logical, Exact(2), |a| logic::and(&a[0], &a[1])),
        RegistryEntry::new("or", Logical, Exact(2), |a| logic::or(&a[0], &a[1])),
        RegistryEntry::new("not", Logical, Exact(1), |a| logic::not(&a[0])),
        RegistryEntry::new("in", Logical, AtLeast(1), |a| logic::is_in(&a[0], &a[1..])),
        // Null handling
        RegistryEntry::new("notNull", NullHandling, Exact(1), |a| logic::not_null(&a[0])),
        RegistryEntry::new("coalesce", NullHandling, AtLeast(0), logic::coalesce),
        // Regex
        RegistryEntry::new("regex", Regex, Exact(2), |a| pattern::regex(&a[0], &a[1])),
        // Arithmetic
        RegistryEntry::new("add", Arithmetic, Exact(2), |a| {
            arithmetic::add(&a[0], &a[1])
        }),
        RegistryEntry::new("sub", Arithmetic, Exact(2), |a| {
            arithmetic::sub(&a[0], &a[1])
        }),
        RegistryEntry::new("mul", Arithmetic, Exact(2), |a| {
            arithmetic::mul(&a[0], &a[1])
        }),
        RegistryEntry::new("div", Arithmetic, Exact(2), |a| {
            arithmetic::div(&a[0], &a[1])
        }),
        RegistryEntry::new("mod", Arithmetic, Exact(2), |a| {
            arithmetic::modulo(&a[0], &a[1])
        }),
        RegistryEntry::new("neg", Arithmetic, Exact(1), |a| arithmetic::neg(&a[0])),
        // Rounding math
        RegistryEntry::new("round", RoundingMath, Exact(2), |a| {
            math::round(&a[0], &a[1])
        }),
        RegistryEntry::new("truncate", RoundingMath, Exact(2), |a| {
            math::truncate(&a[0], &a[1])
        }),
        // Unary math
        RegistryEntry::new("abs", UnaryMath, Exact(1), |a| math::abs(&a[0])),
        RegistryEntry::new("acos", UnaryMath, Exact(1), |a| math::acos(&a[0])),
        RegistryEntry::new("asin", UnaryMath, Exact(1), |a| math::asin(&a[0])),
        RegistryEntry::new("atan", UnaryMath, Exact(1), |a| math::atan(&a[0])),
        RegistryEntry::new("cbrt", UnaryMath, Exact(1), |a| math::cbrt(&a[0])),
        RegistryEntry::new("ceil", UnaryMath, Exact(1), |a| math::ceil(&a[0])),
        RegistryEntry::new("cos", UnaryMath, Exact(1), |a| math::cos(&a[0])),
        RegistryEntry::new("cosh", UnaryMath, Exact(1), |a| math::cosh(&a[0])),
        RegistryEntry::new("cot", UnaryMath, Exact(1), |a| math::cot(&a[0])),
        RegistryEntry::new("degrees", UnaryMath, Exact(1), |a| math::degrees(&a[0])),
        RegistryEntry::new("e", UnaryMath, Exact(0), |_| math::e()),
        RegistryEntry::new("exp", UnaryMath, Exact(1), |a| math::exp(&a[0])),
        RegistryEntry::new("expm1", UnaryMath, Exact(1), |a| math::expm1(&a[0])),
        RegistryEntry::new("floor", UnaryMath, Exact(1), |a| math::floor(&a[0])),
        RegistryEntry::new("log", UnaryMath, Exact(1), |a| math::log(&a[0])),
        RegistryEntry::new("log10", UnaryMath, Exact(1), |a| math::log10(&a[0])),
        RegistryEntry::new("pi", UnaryMath, Exact(0), |_| math::pi()),
        RegistryEntry::new("radians", UnaryMath, Exact(1), |a| math::radians(&a[0])),
        RegistryEntry::new("random", UnaryMath, Exact(1), |a| math::random(&a[0])),
        RegistryEntry::new("sign", UnaryMath, Exact(1), |a| math::sign(&a[0])),
        RegistryEntry::new("sin", UnaryMath, Exact(1), |a| math::sin(&a[0])),
        RegistryEntry::new("sinh", UnaryMath, Exact(1), |a| math::sinh(&a[0])),
        RegistryEntry::new("sqrt", UnaryMath, Exact(1), |a| math::sqrt(&a[0])),
        RegistryEntry::new("tan", UnaryMath, Exact(1), |a| math::tan(&a[0])),
        // Date/time extraction
        RegistryEntry::new("dateTimeChrono", DateTimeExtraction, Exact(3), |a| {
            datetime::date_time_chrono(&a[0], &a[1], &a[2])
        }),
        RegistryEntry::new("dayName", DateTimeExtraction, Exact(2), |a| {
            datetime::day_name(&a[0], &a[1])
        }),
        RegistryEntry::new("monthName", DateTimeExtraction, Exact(2), |a| {
            datetime::month_name(&a[0], &a[1])
        }),
        RegistryEntry::new("quarter", DateTimeExtraction, Exact(2), |a| {
            datetime::quarter(&a[0], &a[1])
        }),
        // String transforms
        RegistryEntry::new("ascii", StringTransform, Exact(1), |a| string::ascii(&a[0])),
        RegistryEntry::new("bitLength", StringTransform, Exact(1), |a| {
            string::bit_length(&a[0])
        }),
        RegistryEntry::new("character", StringTransform, Exact(1), |a| {
            string::character(&a[0])
        }),
        RegistryEntry::new("charLength", StringTransform, Exact(1), |a| {
            string::char_length(&a[0])
        }),
        RegistryEntry::new("concat", StringTransform, Exact(2), |a| {
            string::concat(&a[0], &a[1])
        }),
        RegistryEntry::new("insert", StringTransform, Exact(4), |a| {
            string::insert(&a[0], &a[1], &a[2], &a[3])
        }),
        RegistryEntry::new("lcase", StringTransform, Exact(1), |a| string::lcase(&a[0])),
        RegistryEntry::new("left", StringTransform, Exact(2), |a| {
            string::left(&a[0], &a[1])
        }),
        RegistryEntry::new("length", StringTransform, Exact(1), |a| {
            string::length(&a[0])
        }),
        RegistryEntry::new("locate", StringTransform, Range(2, 3), |a| {
            string::locate_from(&a[0], &a[1], a.get(2).unwrap_or(&Scalar::Null))
        }),
        RegistryEntry::new("ltrim", StringTransform, Exact(1), |a| string::ltrim(&a[0])),
        RegistryEntry::new("octetLength", StringTransform, Exact(1), |a| {
            string::octet_length(&a[0])
        }),
        RegistryEntry::new("position", StringTransform, Exact(2), |a| {
            string::position(&a[0], &a[1])
        }),
        RegistryEntry::new("repeat", StringTransform, Exact(2), |a| {
            string::repeat(&a[0], &a[1])
        }),
        RegistryEntry::new("replace", StringTransform, Exact(3), |a| {
            string::replace(&a[0], &a[1], &a[2])
        }),
        RegistryEntry::new("right", StringTransform, Exact(2), |a| {
            string::right(&a[0], &a[1])
        }),
        RegistryEntry::new("rtrim", StringTransform, Exact(1), |a| string::rtrim(&a[0])),
        RegistryEntry::new("space", StringTransform, Exact(1), |a| string::space(&a[0])),
        RegistryEntry::new("substring", StringTransform, Exact(3), |a| {
            string::substring(&a[0], &a[1], &a[2])
        }),
        RegistryEntry::new("ucase", StringTransform, Exact(1), |a| string::ucase(&a[0])),
    ];

    let map: HashMap<_, _> = entries.into_iter().map(|e| (e.name, e)).collect();
    debug!("Registered {} scalar functions", map.len());
    map
}
