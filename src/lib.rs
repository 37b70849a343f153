//! sqlscript-core - Whitelisted scalar-function registry for compiled SQL
//! expression scripts.
//!
//! A query planner compiles SQL scalar expressions into calls against a
//! fixed set of named functions, evaluated inside a sandboxed script host.
//! This crate is that call surface: a field accessor that turns a
//! possibly-absent document field into a nullable scalar, and a registry of
//! pure functions that enforce SQL three-valued null semantics before
//! delegating to per-category processors.
//!
//! # Main Components
//!
//! - **Scalar**: the nullable operand type (`Scalar::Null` is SQL NULL)
//! - **Fields**: per-document field-value containers and the accessor
//! - **Registry**: one entry per scalar function, plus a static whitelist
//!   catalog for name-based dispatch by the script host
//!
//! # Example
//!
//! ```rust
//! use sqlscript_core::{doc_value, null_safe_filter, registry, FieldValues, Scalar};
//!
//! let mut doc = FieldValues::new();
//! doc.insert("status".to_string(), vec![Scalar::from("OK")]);
//!
//! // status = 'OK' matches this document...
//! let matched = registry::eq(&doc_value(&doc, "status"), &Scalar::from("OK")).unwrap();
//! assert!(null_safe_filter(&matched));
//!
//! // ...and a document without the field yields NULL, which filters out.
//! let missing = registry::eq(&doc_value(&doc, "priority"), &Scalar::from(1)).unwrap();
//! assert_eq!(missing, Scalar::Null);
//! assert!(!null_safe_filter(&missing));
//! ```

pub mod error;
pub mod fields;
pub mod registry;
pub mod scalar;

// Re-export main types for convenience
pub use error::{ScriptError, ScriptResult};
pub use fields::{doc_value, fields_from_json, FieldValues};
pub use registry::catalog::{entries, invoke, lookup, Arity, Category, RegistryEntry};
pub use registry::{null_safe_filter, null_safe_sort_numeric, null_safe_sort_string};
pub use scalar::Scalar;
