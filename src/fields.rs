//! Per-document field-value containers and the scalar field accessor.
//!
//! A document presents each field as an ordered, possibly-empty sequence of
//! raw values. Scalar expression contexts only ever see the first value;
//! the truncation of multi-valued fields is deliberate, not an error.

use std::collections::HashMap;

use serde_json::Value;

use crate::scalar::Scalar;

/// Field name to ordered value sequence, for one document.
pub type FieldValues = HashMap<String, Vec<Scalar>>;

/// Extract a single scalar from a document's field-value container.
///
/// Returns the first value of the container, or `Scalar::Null` when the
/// field is absent or its container is empty. Never fails: a missing field
/// is a logical null, not an error.
#[inline]
pub fn doc_value(doc: &FieldValues, field: &str) -> Scalar {
    match doc.get(field) {
        Some(values) => values.first().cloned().unwrap_or(Scalar::Null),
        None => Scalar::Null,
    }
}

/// Build a field-value container from a JSON document.
///
/// Nested objects are flattened into dot-separated paths (e.g.
/// "address.city"), arrays become multi-valued containers, and JSON nulls
/// are dropped (an all-null field is indistinguishable from an absent one).
pub fn fields_from_json(doc: &Value) -> FieldValues {
    let mut out = FieldValues::new();
    if let Value::Object(map) = doc {
        for (key, value) in map {
            flatten_into(key, value, &mut out);
        }
    }
    out
}

fn flatten_into(path: &str, value: &Value, out: &mut FieldValues) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}.{}", path, key), nested, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten_into(path, item, out);
            }
        }
        Value::Null => {}
        Value::Bool(b) => push(path, Scalar::Bool(*b), out),
        Value::Number(n) => {
            let scalar = match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64().unwrap_or(0.0)),
            };
            push(path, scalar, out);
        }
        Value::String(s) => push(path, Scalar::Text(s.clone()), out),
    }
}

fn push(path: &str, scalar: Scalar, out: &mut FieldValues) {
    out.entry(path.to_string()).or_default().push(scalar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_doc_value_first_entry() {
        let mut doc = FieldValues::new();
        doc.insert("a".to_string(), vec![Scalar::Int(10), Scalar::Int(20)]);

        assert_eq!(doc_value(&doc, "a"), Scalar::Int(10));
    }

    #[test]
    fn test_doc_value_missing_and_empty() {
        let mut doc = FieldValues::new();
        doc.insert("empty".to_string(), vec![]);

        assert_eq!(doc_value(&doc, "empty"), Scalar::Null);
        assert_eq!(doc_value(&doc, "absent"), Scalar::Null);
    }

    #[test]
    fn test_fields_from_json_flattening() {
        let doc = json!({
            "name": "Alice",
            "age": 30,
            "address": {"city": "NYC"},
            "tags": ["a", "b"],
            "deleted": null
        });
        let fields = fields_from_json(&doc);

        assert_eq!(doc_value(&fields, "name"), Scalar::Text("Alice".into()));
        assert_eq!(doc_value(&fields, "age"), Scalar::Int(30));
        assert_eq!(
            doc_value(&fields, "address.city"),
            Scalar::Text("NYC".into())
        );
        assert_eq!(fields["tags"].len(), 2);
        assert_eq!(doc_value(&fields, "tags"), Scalar::Text("a".into()));
        assert_eq!(doc_value(&fields, "deleted"), Scalar::Null);
    }
}
