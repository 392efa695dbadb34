//! Tests for the whole-signature strategy: model-free signatures validated
//! by a single plain schema, behaving exactly like that schema.

use serde_json::{json, Value};

use vargs_core::{ArgMap, ValidatedArgs, ValidationError};
use vargs_schema::{FieldRule, FieldType, PlainSchema, Signature, Strategy, Validator};

fn args(value: Value) -> ArgMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn signature() -> Signature {
    Signature::builder("transfer")
        .plain("amount", FieldType::Integer)
        .plain("memo", FieldType::String)
        .plain_with_default("dry_run", FieldType::Bool, json!(false))
        .build()
        .unwrap()
}

/// A model-free signature must behave identically to applying its plain
/// schema directly over the full parameter set.
#[test]
fn test_matches_direct_plain_schema() {
    let validator = Validator::new(signature(), |a: ValidatedArgs| a);
    assert_eq!(validator.strategy(), Strategy::WholeSignature);

    let schema = PlainSchema::new(
        "transfer",
        vec![
            FieldRule::required("amount", FieldType::Integer),
            FieldRule::required("memo", FieldType::String),
            FieldRule::with_default("dry_run", FieldType::Bool, json!(false)),
        ],
    );

    let raw = args(json!({ "amount": "25", "memo": 7 }));
    let validated = validator.validate(&raw).unwrap();
    let direct = schema.validate(&raw).unwrap();

    assert_eq!(validated.len(), direct.len());
    for (name, value) in &direct {
        assert_eq!(validated.plain(name), Some(value));
    }
}

#[test]
fn test_valid_typed_arguments_pass_through() {
    let validator = Validator::new(signature(), |a: ValidatedArgs| a);
    let validated = validator
        .validate(&args(json!({ "amount": 25, "memo": "rent", "dry_run": true })))
        .unwrap();

    assert_eq!(validated.plain("amount"), Some(&json!(25)));
    assert_eq!(validated.plain("memo"), Some(&json!("rent")));
    assert_eq!(validated.plain("dry_run"), Some(&json!(true)));
}

#[test]
fn test_mistyped_arguments_fail_with_violations() {
    let validator = Validator::new(signature(), |a: ValidatedArgs| a);
    let err = validator
        .validate(&args(json!({ "amount": [], "memo": "rent" })))
        .unwrap_err();

    match &err {
        ValidationError::SchemaViolations { schema, violations } => {
            assert_eq!(schema, "transfer");
            assert_eq!(violations.len(), 1);
            assert_eq!(violations.violations()[0].field, "amount");
        }
        other => panic!("expected SchemaViolations, got: {other}"),
    }
}

#[test]
fn test_defaults_fill_absent_parameters() {
    let validator = Validator::new(signature(), |a: ValidatedArgs| a);
    let validated = validator
        .validate(&args(json!({ "amount": 1, "memo": "x" })))
        .unwrap();

    assert_eq!(validated.plain("dry_run"), Some(&json!(false)));
}

#[test]
fn test_result_keys_are_exactly_the_parameter_names() {
    let validator = Validator::new(signature(), |a: ValidatedArgs| a);
    let validated = validator
        .validate(&args(json!({
            "amount": 1,
            "memo": "x",
            "extra": "never seen",
        })))
        .unwrap();

    let mut names: Vec<&str> = validated.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["amount", "dry_run", "memo"]);
}

#[test]
fn test_any_typed_parameter_accepts_anything() {
    let sig = Signature::builder("log")
        .plain("payload", FieldType::Any)
        .build()
        .unwrap();
    let validator = Validator::new(sig, |a: ValidatedArgs| a);

    for payload in [json!(null), json!({"deep": [1, 2]}), json!("text")] {
        let validated = validator
            .validate(&args(json!({ "payload": payload.clone() })))
            .unwrap();
        assert_eq!(validated.plain("payload"), Some(&payload));
    }
}

#[test]
fn test_empty_signature_validates_empty() {
    let sig = Signature::builder("ping").build().unwrap();
    let validator = Validator::new(sig, |a: ValidatedArgs| a.is_empty());
    assert!(validator.call(&ArgMap::new()).unwrap());
    // Extra keys are ignored even by an empty signature.
    assert!(validator.call(&args(json!({ "noise": 1 }))).unwrap());
}
