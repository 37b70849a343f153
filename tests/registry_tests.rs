//! Scalar registry integration tests
//! Exercises null propagation and dispatch through the public surface,
//! both the typed entry functions and the name-based catalog.

use chrono::{DateTime, Utc};
use serde_json::json;
use sqlscript_core::{
    doc_value, fields_from_json, invoke, null_safe_filter, null_safe_sort_numeric,
    null_safe_sort_string, registry, FieldValues, Scalar, ScriptError,
};

fn t(s: &str) -> Scalar {
    Scalar::Text(s.to_string())
}

fn ts(s: &str) -> Scalar {
    Scalar::Timestamp(
        DateTime::parse_from_rfc3339(s)
            .unwrap()
            .with_timezone(&Utc),
    )
}

// ==================== Null propagation ====================

#[test]
fn test_comparisons_propagate_null_both_sides() {
    for name in ["eq", "neq", "lt", "lte", "gt", "gte"] {
        for probe in [Scalar::Int(3), t("x"), Scalar::Bool(true)] {
            assert_eq!(
                invoke(name, &[Scalar::Null, probe.clone()]).unwrap(),
                Scalar::Null,
                "{}(null, x)",
                name
            );
            assert_eq!(
                invoke(name, &[probe, Scalar::Null]).unwrap(),
                Scalar::Null,
                "{}(x, null)",
                name
            );
        }
    }
}

#[test]
fn test_three_valued_logic_tables() {
    let n = Scalar::Null;
    let f = Scalar::Bool(false);
    let tr = Scalar::Bool(true);

    assert_eq!(invoke("and", &[n.clone(), f.clone()]).unwrap(), f);
    assert_eq!(invoke("and", &[n.clone(), tr.clone()]).unwrap(), n);
    assert_eq!(invoke("and", &[n.clone(), n.clone()]).unwrap(), n);
    assert_eq!(invoke("or", &[n.clone(), tr.clone()]).unwrap(), tr);
    assert_eq!(invoke("or", &[n.clone(), f.clone()]).unwrap(), n);
    assert_eq!(invoke("not", &[n.clone()]).unwrap(), n);
}

#[test]
fn test_not_null_and_coalesce() {
    assert_eq!(
        invoke("notNull", &[Scalar::Null]).unwrap(),
        Scalar::Bool(false)
    );
    assert_eq!(
        invoke("notNull", &[Scalar::Int(0)]).unwrap(),
        Scalar::Bool(true)
    );

    assert_eq!(
        invoke(
            "coalesce",
            &[Scalar::Null, Scalar::Null, Scalar::Int(5), Scalar::Null]
        )
        .unwrap(),
        Scalar::Int(5)
    );
    assert_eq!(
        invoke("coalesce", &[Scalar::Null, Scalar::Null]).unwrap(),
        Scalar::Null
    );

    // notNull(coalesce([null, 7])) == true
    let first = invoke("coalesce", &[Scalar::Null, Scalar::Int(7)]).unwrap();
    assert_eq!(invoke("notNull", &[first]).unwrap(), Scalar::Bool(true));
}

#[test]
fn test_arithmetic_null_propagation() {
    assert_eq!(
        invoke("add", &[Scalar::Null, Scalar::Int(3)]).unwrap(),
        Scalar::Null
    );
    assert_eq!(
        invoke("div", &[Scalar::Int(10), Scalar::Null]).unwrap(),
        Scalar::Null
    );
    assert_eq!(
        invoke("round", &[Scalar::Null, Scalar::Int(2)]).unwrap(),
        Scalar::Null
    );
    assert_eq!(invoke("sqrt", &[Scalar::Null]).unwrap(), Scalar::Null);
}

#[test]
fn test_regex_null_is_null_not_false() {
    assert_eq!(
        invoke("regex", &[Scalar::Null, t(".*")]).unwrap(),
        Scalar::Null
    );
    assert_eq!(
        invoke("regex", &[t("abc"), Scalar::Null]).unwrap(),
        Scalar::Null
    );
    assert_eq!(
        invoke("regex", &[t("abc"), t("a.c")]).unwrap(),
        Scalar::Bool(true)
    );
}

// ==================== Materialization helpers ====================

#[test]
fn test_materialization_rules_do_not_propagate() {
    assert_eq!(null_safe_sort_numeric(&Scalar::Null), 0.0);
    assert_eq!(null_safe_sort_string(&Scalar::Null), "");
    assert!(!null_safe_filter(&Scalar::Null));
}

// ==================== Field accessor ====================

#[test]
fn test_field_accessor_first_value_or_null() {
    let mut doc = FieldValues::new();
    doc.insert("a".to_string(), vec![Scalar::Int(10), Scalar::Int(20)]);

    assert_eq!(doc_value(&doc, "a"), Scalar::Int(10));
    assert_eq!(doc_value(&doc, "b"), Scalar::Null);
}

#[test]
fn test_missing_field_filters_out_instead_of_failing() {
    // eq(extract(doc, "status"), "OK") on a doc without "status" is NULL,
    // and the filter stage turns that NULL into exclusion.
    let doc = fields_from_json(&json!({"name": "Alice"}));
    let status = doc_value(&doc, "status");
    let matched = registry::eq(&status, &t("OK")).unwrap();

    assert_eq!(matched, Scalar::Null);
    assert!(!null_safe_filter(&matched));
}

// ==================== Operator semantics spot checks ====================

#[test]
fn test_locate_two_and_three_arg_forms_agree() {
    let two = invoke("locate", &[t("ab"), t("xaby")]).unwrap();
    let three = invoke("locate", &[t("ab"), t("xaby"), Scalar::Null]).unwrap();
    assert_eq!(two, three);
    assert_eq!(two, Scalar::Int(2));
}

#[test]
fn test_round_negative_scale() {
    assert_eq!(
        invoke("round", &[Scalar::Float(123.456), Scalar::Int(-2)]).unwrap(),
        Scalar::Float(100.0)
    );
    assert_eq!(
        invoke("truncate", &[Scalar::Int(1987), Scalar::Int(-2)]).unwrap(),
        Scalar::Int(1900)
    );
}

#[test]
fn test_datetime_pipeline() {
    let dt = ts("2024-03-15T10:30:45Z");
    assert_eq!(
        invoke("dateTimeChrono", &[dt.clone(), t("UTC"), t("YEAR")]).unwrap(),
        Scalar::Int(2024)
    );
    assert_eq!(
        invoke("dayName", &[dt.clone(), t("UTC")]).unwrap(),
        t("Friday")
    );
    assert_eq!(invoke("quarter", &[dt, t("UTC")]).unwrap(), Scalar::Int(1));
}

#[test]
fn test_invalid_temporal_is_typed_error() {
    let err = invoke("dayName", &[t("2024-03-15"), t("UTC")]).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidTemporal(_)));
}

#[test]
fn test_contract_violations_are_loud() {
    assert!(matches!(
        invoke("noSuchFunction", &[]),
        Err(ScriptError::UnknownFunction(_))
    ));
    assert!(matches!(
        invoke("eq", &[Scalar::Int(1)]),
        Err(ScriptError::ArityError(_))
    ));
    assert!(matches!(
        invoke("and", &[Scalar::Int(1), Scalar::Bool(true)]),
        Err(ScriptError::TypeError(_))
    ));
}

// ==================== End-to-end expression ====================

#[test]
fn test_compiled_expression_shape() {
    // WHERE ucase(name) = 'ALICE' AND age + 1 > 30
    let doc = fields_from_json(&json!({"name": "Alice", "age": 30}));

    let name_ok = invoke(
        "eq",
        &[
            invoke("ucase", &[doc_value(&doc, "name")]).unwrap(),
            t("ALICE"),
        ],
    )
    .unwrap();
    let age_ok = invoke(
        "gt",
        &[
            invoke("add", &[doc_value(&doc, "age"), Scalar::Int(1)]).unwrap(),
            Scalar::Int(30),
        ],
    )
    .unwrap();
    let keep = invoke("and", &[name_ok, age_ok]).unwrap();

    assert!(null_safe_filter(&keep));
}
