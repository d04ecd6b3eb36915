use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::manifest::ValidationError;
use crate::service::{check, validator_fn, TypedSchema, Validate, Validator};

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    item_code: String,
    #[serde(default = "default_true")]
    is_active: bool,
}

impl Validate for Item {}

#[test]
fn test_typed_schema_applies_defaults_and_strips_unknown() {
    let schema = TypedSchema::<Item>::new();
    let out = schema
        .validate(json!({"itemCode": "X-1", "extra": 1}))
        .expect("valid input");
    assert_eq!(out, json!({"itemCode": "X-1", "isActive": true}));
}

#[test]
fn test_typed_schema_parse_returns_typed_value() {
    let item = TypedSchema::<Item>::new()
        .parse(json!({"itemCode": "X-2", "isActive": false}))
        .unwrap();
    assert_eq!(item.item_code, "X-2");
    assert!(!item.is_active);
    assert!(check(&item).is_ok());
}

#[test]
fn test_typed_schema_reports_decode_error() {
    let err = TypedSchema::<Item>::new().validate(json!({})).unwrap_err();
    assert_eq!(err.issues.len(), 1);
    assert!(err.to_string().contains("itemCode"));
}

#[test]
fn test_fn_validator() {
    let upper = validator_fn(|v| match v.as_str() {
        Some(s) => Ok(json!(s.to_uppercase())),
        None => Err(ValidationError::single("", "Expected string")),
    });
    assert_eq!(upper.validate(json!("abc")).unwrap(), json!("ABC"));
    assert!(upper.validate(json!(1)).is_err());
}
