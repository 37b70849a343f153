//! Error types for sqlscript-core.
//!
//! Logical null is never an error: it flows through the registry as
//! `Scalar::Null`. Errors here are either invalid values (bad temporal,
//! bad pattern) that abort a single evaluation, or contract violations
//! (wrong type/arity, unknown name) that indicate a planner bug.

use thiserror::Error;

/// Script registry error type
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Invalid temporal value: {0}")]
    InvalidTemporal(String),

    #[error("Type error: {0}")]
    TypeError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Arity error: {0}")]
    ArityError(String),
}

/// Result type for registry operations
pub type ScriptResult<T> = Result<T, ScriptError>;

impl serde::Serialize for ScriptError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
