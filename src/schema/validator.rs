//! Compiled field validator
//!
//! Validation semantics:
//! - Candidate must be an object
//! - Required fields are present and non-null
//! - Optional fields may be absent or null
//! - Declared field types match exactly (no coercion)
//! - Undeclared fields are allowed at every nesting level
//!
//! The validator never mutates or copies its input. `check` hands back the
//! value it was given.

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult, ValidationDetails};
use super::types::{FieldSchema, FieldType};

/// Path used when the candidate itself has the wrong shape.
pub const ROOT_PATH: &str = "$root";

/// A field schema compiled into a reusable checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidator {
    schema: FieldSchema,
    label: Option<String>,
}

impl FieldValidator {
    /// Compiles a field schema into a validator.
    pub fn compile(schema: &FieldSchema) -> Self {
        Self {
            schema: schema.clone(),
            label: None,
        }
    }

    /// Attaches a label (usually the variant name) reported in errors.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Validates `candidate` and returns it unchanged when it matches.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` (ADT_SCHEMA_VALIDATION_FAILED) on the first
    /// mismatch found, in schema declaration order.
    pub fn check(&self, candidate: Value) -> SchemaResult<Value> {
        self.check_ref(&candidate)?;
        Ok(candidate)
    }

    /// Validates a borrowed candidate.
    pub fn check_ref(&self, candidate: &Value) -> SchemaResult<()> {
        let obj = candidate
            .as_object()
            .ok_or_else(|| self.type_error(ROOT_PATH, "object", candidate))?;
        self.check_map(obj)
    }

    /// Validates an already-destructured object.
    pub fn check_map(&self, obj: &Map<String, Value>) -> SchemaResult<()> {
        self.validate_object(obj, &self.schema, "")
    }

    /// Validates an object against field definitions.
    fn validate_object(
        &self,
        obj: &Map<String, Value>,
        fields: &FieldSchema,
        path_prefix: &str,
    ) -> SchemaResult<()> {
        for (field_name, field_def) in fields.iter() {
            let field_path = make_path(path_prefix, field_name);

            match obj.get(field_name) {
                Some(Value::Null) | None if !field_def.required => {}
                Some(Value::Null) => {
                    return Err(self.failure(ValidationDetails::null_value(field_path)));
                }
                None => {
                    return Err(self.failure(ValidationDetails::missing_field(field_path)));
                }
                Some(value) => {
                    self.validate_value(value, &field_def.field_type, &field_path)?;
                }
            }
        }

        Ok(())
    }

    /// Validates a value against a field type.
    fn validate_value(
        &self,
        value: &Value,
        expected_type: &FieldType,
        field_path: &str,
    ) -> SchemaResult<()> {
        match expected_type {
            FieldType::String => {
                if !value.is_string() {
                    return Err(self.type_error(field_path, "string", value));
                }
            }
            FieldType::Int => {
                // Must be an integer (not a float)
                if !value.is_i64() && !value.is_u64() {
                    return Err(self.type_error(field_path, "int", value));
                }
            }
            FieldType::Bool => {
                if !value.is_boolean() {
                    return Err(self.type_error(field_path, "bool", value));
                }
            }
            FieldType::Float => {
                if !value.is_number() {
                    return Err(self.type_error(field_path, "float", value));
                }
            }
            FieldType::Any => {
                if value.is_null() {
                    return Err(self.failure(ValidationDetails::null_value(field_path)));
                }
            }
            FieldType::Object { fields } => {
                let obj = value
                    .as_object()
                    .ok_or_else(|| self.type_error(field_path, "object", value))?;
                self.validate_object(obj, fields, field_path)?;
            }
            FieldType::Array { element_type } => {
                let arr = value
                    .as_array()
                    .ok_or_else(|| self.type_error(field_path, "array", value))?;

                for (i, elem) in arr.iter().enumerate() {
                    let elem_path = format!("{}[{}]", field_path, i);

                    if elem.is_null() {
                        return Err(self.failure(ValidationDetails::null_value(elem_path)));
                    }

                    self.validate_value(elem, element_type, &elem_path)?;
                }
            }
        }

        Ok(())
    }

    fn failure(&self, details: ValidationDetails) -> SchemaError {
        SchemaError::validation_failed(self.label(), details)
    }

    fn type_error(&self, field_path: &str, expected: &str, actual: &Value) -> SchemaError {
        self.failure(ValidationDetails::type_mismatch(
            field_path,
            expected,
            json_type_name(actual),
        ))
    }
}

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldDef;
    use serde_json::json;

    fn products_validator() -> FieldValidator {
        let schema = FieldSchema::new()
            .field("products", FieldDef::required_array(FieldType::any_object()))
            .field("page", FieldDef::optional_int());
        FieldValidator::compile(&schema).labeled("ReceiveProducts")
    }

    #[test]
    fn test_valid_value_passes() {
        let validator = products_validator();
        let value = json!({ "products": [{ "id": "1" }] });
        assert_eq!(validator.check(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let validator = products_validator();
        let value = json!({ "products": [], "meta": { "time": 1 }, "@@symbol": true });
        assert_eq!(validator.check(value.clone()).unwrap(), value);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let validator = products_validator();
        let err = validator.check(json!({ "page": 2 })).unwrap_err();
        let details = err.details().unwrap();
        assert_eq!(details.field, "products");
        assert_eq!(details.actual, "missing");
        assert_eq!(err.variant(), Some("ReceiveProducts"));
    }

    #[test]
    fn test_type_mismatch_fails() {
        let validator = products_validator();
        let err = validator.check(json!({ "products": "wow" })).unwrap_err();
        let details = err.details().unwrap();
        assert_eq!(details.field, "products");
        assert_eq!(details.expected, "array");
        assert_eq!(details.actual, "string");
    }

    #[test]
    fn test_optional_field_may_be_null() {
        let validator = products_validator();
        assert!(validator.check_ref(&json!({ "products": [], "page": null })).is_ok());
    }

    #[test]
    fn test_required_field_null_rejected() {
        let validator = products_validator();
        let err = validator.check_ref(&json!({ "products": null })).unwrap_err();
        assert_eq!(err.details().unwrap().actual, "null");
    }

    #[test]
    fn test_non_object_root_rejected() {
        let validator = products_validator();
        let err = validator.check_ref(&json!([1, 2])).unwrap_err();
        assert_eq!(err.details().unwrap().field, ROOT_PATH);
    }

    #[test]
    fn test_empty_schema_accepts_any_object() {
        let validator = FieldValidator::compile(&FieldSchema::new());
        assert!(validator.check_ref(&json!({})).is_ok());
        assert!(validator.check_ref(&json!({ "x": 1 })).is_ok());
        assert!(validator.check_ref(&json!("nope")).is_err());
    }

    #[test]
    fn test_int_rejects_float() {
        let schema = FieldSchema::new().field("count", FieldDef::required_int());
        let validator = FieldValidator::compile(&schema);
        assert!(validator.check_ref(&json!({ "count": 3 })).is_ok());
        let err = validator.check_ref(&json!({ "count": 3.5 })).unwrap_err();
        assert_eq!(err.details().unwrap().actual, "float");
    }

    #[test]
    fn test_float_accepts_integers() {
        let schema = FieldSchema::new().field("score", FieldDef::required_float());
        let validator = FieldValidator::compile(&schema);
        assert!(validator.check_ref(&json!({ "score": 100 })).is_ok());
        assert!(validator.check_ref(&json!({ "score": 99.5 })).is_ok());
    }

    #[test]
    fn test_nested_object_path() {
        let cart = FieldSchema::new()
            .field("items", FieldDef::required_array(FieldType::String))
            .field("total", FieldDef::required_float());
        let schema = FieldSchema::new().field("cart", FieldDef::required_object(cart));
        let validator = FieldValidator::compile(&schema);

        assert!(validator
            .check_ref(&json!({ "cart": { "items": ["a"], "total": 1.5, "coupon": "X" } }))
            .is_ok());

        let err = validator
            .check_ref(&json!({ "cart": { "items": ["a", 2], "total": 1 } }))
            .unwrap_err();
        assert_eq!(err.details().unwrap().field, "cart.items[1]");

        let err = validator
            .check_ref(&json!({ "cart": { "items": [] } }))
            .unwrap_err();
        assert_eq!(err.details().unwrap().field, "cart.total");
    }

    #[test]
    fn test_array_null_element_rejected() {
        let schema = FieldSchema::new().field("values", FieldDef::required_array(FieldType::Any));
        let validator = FieldValidator::compile(&schema);
        let err = validator.check_ref(&json!({ "values": [1, null] })).unwrap_err();
        assert_eq!(err.details().unwrap().field, "values[1]");
    }

    #[test]
    fn test_unlabeled_error_message() {
        let schema = FieldSchema::new().field("name", FieldDef::required_string());
        let err = FieldValidator::compile(&schema).check_ref(&json!({})).unwrap_err();
        assert!(err.variant().is_none());
        assert!(err.message().starts_with("Validation failed"));
    }
}
