//! Schema Invariant Tests
//!
//! Field validation rules:
//! - Validation is deterministic
//! - All required fields must be present and non-null
//! - Undeclared fields are allowed
//! - Type matching is exact
//! - Input is returned untouched

use algebraic_type::schema::{FieldDef, FieldSchema, FieldType, FieldValidator};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn user_validator() -> FieldValidator {
    let schema = FieldSchema::new()
        .field("id", FieldDef::required_string())
        .field("name", FieldDef::required_string())
        .field("age", FieldDef::optional_int());
    FieldValidator::compile(&schema).labeled("UserCreated")
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same value validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let validator = user_validator();
    let value = json!({ "id": "u1", "name": "Alice" });

    for _ in 0..100 {
        assert!(validator.check_ref(&value).is_ok());
    }
}

/// The first failure reported follows declaration order.
#[test]
fn test_first_failure_in_declaration_order() {
    let validator = user_validator();
    let err = validator.check_ref(&json!({ "age": "old" })).unwrap_err();
    assert_eq!(err.details().unwrap().field, "id");
}

// =============================================================================
// Required / Optional Field Tests
// =============================================================================

#[test]
fn test_missing_required_field() {
    let validator = user_validator();
    assert!(validator.check_ref(&json!({ "id": "u1" })).is_err());
}

#[test]
fn test_optional_field_omitted_or_present() {
    let validator = user_validator();
    assert!(validator.check_ref(&json!({ "id": "u1", "name": "A" })).is_ok());
    assert!(validator.check_ref(&json!({ "id": "u1", "name": "A", "age": 30 })).is_ok());
    assert!(validator.check_ref(&json!({ "id": "u1", "name": "A", "age": null })).is_ok());
}

#[test]
fn test_required_null_rejected() {
    let validator = user_validator();
    let err = validator.check_ref(&json!({ "id": "u1", "name": null })).unwrap_err();
    assert_eq!(err.details().unwrap().actual, "null");
}

// =============================================================================
// Type Matching Tests
// =============================================================================

#[test]
fn test_type_mismatch_fails() {
    let validator = user_validator();
    let err = validator.check_ref(&json!({ "id": "u1", "name": 12345 })).unwrap_err();
    let details = err.details().unwrap();
    assert_eq!(details.expected, "string");
    assert_eq!(details.actual, "int");
}

#[test]
fn test_no_coercion() {
    let validator = user_validator();
    assert!(validator.check_ref(&json!({ "id": "u1", "name": "A", "age": "30" })).is_err());
    assert!(validator.check_ref(&json!({ "id": "u1", "name": "A", "age": 30.5 })).is_err());
}

#[test]
fn test_bool_and_any() {
    let schema = FieldSchema::new()
        .field("flag", FieldDef::required_bool())
        .field("payload", FieldDef::required(FieldType::Any));
    let validator = FieldValidator::compile(&schema);

    assert!(validator.check_ref(&json!({ "flag": false, "payload": [1] })).is_ok());
    assert!(validator.check_ref(&json!({ "flag": 0, "payload": 1 })).is_err());
    assert!(validator.check_ref(&json!({ "flag": true, "payload": null })).is_err());
}

// =============================================================================
// Undeclared Field Tests
// =============================================================================

/// Extra fields pass, at the top level and in nested objects.
#[test]
fn test_extra_fields_allowed() {
    let address = FieldSchema::new().field("city", FieldDef::required_string());
    let schema = FieldSchema::new().field("address", FieldDef::required_object(address));
    let validator = FieldValidator::compile(&schema);

    let value = json!({
        "address": { "city": "NYC", "zip": "10001" },
        "undeclared": "field"
    });
    assert!(validator.check_ref(&value).is_ok());
}

// =============================================================================
// Identity Tests
// =============================================================================

/// check returns exactly what it was given.
#[test]
fn test_check_returns_input() {
    let validator = user_validator();
    let value = json!({ "id": "u1", "name": "A", "extra": { "nested": [1, 2, 3] } });
    assert_eq!(validator.check(value.clone()).unwrap(), value);
}

/// Errors carry the label of the variant they came from.
#[test]
fn test_error_labels_variant() {
    let err = user_validator().check_ref(&json!({})).unwrap_err();
    assert_eq!(err.variant(), Some("UserCreated"));
    assert!(err.to_string().contains("UserCreated"));
}
