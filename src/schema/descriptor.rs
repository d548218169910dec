//! Declarative field descriptors
//!
//! A field schema is written as a JSON object mapping field names to
//! descriptors:
//!
//! - `"string"`, `"int"`, `"bool"`, `"float"`, `"any"`, `"object"`, `"array"`
//!   name a type; a trailing `?` marks the field optional (`"int?"`)
//! - `[d]` is an array whose elements match `d`; `[]` is an array of anything
//! - `{ ... }` is a nested object with its own field schema

use serde_json::{Map, Value};

use super::types::{FieldDef, FieldSchema, FieldType};

/// Parses a field schema description.
///
/// Errors are plain reasons; callers attach the origin.
pub fn parse_field_schema(description: &Value) -> Result<FieldSchema, String> {
    let obj = description
        .as_object()
        .ok_or_else(|| "field schema must be a JSON object".to_string())?;
    parse_fields(obj, "")
}

fn parse_fields(obj: &Map<String, Value>, prefix: &str) -> Result<FieldSchema, String> {
    let mut schema = FieldSchema::new();
    for (name, descriptor) in obj {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        schema.insert(name.clone(), parse_field_def(descriptor, &path)?);
    }
    Ok(schema)
}

/// Parses a single field descriptor.
pub fn parse_field_def(descriptor: &Value, path: &str) -> Result<FieldDef, String> {
    match descriptor {
        Value::String(s) => {
            let (name, required) = match s.strip_suffix('?') {
                Some(base) => (base, false),
                None => (s.as_str(), true),
            };
            let field_type = parse_type_name(name)
                .ok_or_else(|| format!("field '{}': unknown type '{}'", path, name))?;
            Ok(FieldDef::new(field_type, required))
        }
        Value::Array(items) => {
            let element_type = match items.as_slice() {
                [] => FieldType::Any,
                [element] => parse_field_def(element, &format!("{}[]", path))?.field_type,
                _ => {
                    return Err(format!(
                        "field '{}': array descriptor takes one element type, got {}",
                        path,
                        items.len()
                    ))
                }
            };
            Ok(FieldDef::required_array(element_type))
        }
        Value::Object(fields) => Ok(FieldDef::required_object(parse_fields(fields, path)?)),
        other => Err(format!(
            "field '{}': descriptor must be a type name, array or object, got {}",
            path, other
        )),
    }
}

fn parse_type_name(name: &str) -> Option<FieldType> {
    let field_type = match name {
        "string" => FieldType::String,
        "int" => FieldType::Int,
        "bool" => FieldType::Bool,
        "float" => FieldType::Float,
        "any" => FieldType::Any,
        "object" => FieldType::any_object(),
        "array" => FieldType::array_of(FieldType::Any),
        _ => return None,
    };
    Some(field_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_descriptors() {
        let schema = parse_field_schema(&json!({
            "name": "string",
            "age": "int?",
            "active": "bool",
            "score": "float",
            "payload": "any"
        }))
        .unwrap();

        assert_eq!(schema.get("name"), Some(&FieldDef::required_string()));
        assert_eq!(schema.get("age"), Some(&FieldDef::optional_int()));
        assert_eq!(schema.get("active"), Some(&FieldDef::required_bool()));
        assert_eq!(schema.get("score"), Some(&FieldDef::required_float()));
        assert_eq!(schema.get("payload"), Some(&FieldDef::required(FieldType::Any)));
    }

    #[test]
    fn test_array_descriptors() {
        let schema = parse_field_schema(&json!({
            "tags": ["string"],
            "rows": [],
            "loose": "array?"
        }))
        .unwrap();

        assert_eq!(schema.get("tags"), Some(&FieldDef::required_array(FieldType::String)));
        assert_eq!(schema.get("rows"), Some(&FieldDef::required_array(FieldType::Any)));
        assert_eq!(schema.get("loose"), Some(&FieldDef::optional_array(FieldType::Any)));
    }

    #[test]
    fn test_nested_object_descriptor() {
        let schema = parse_field_schema(&json!({
            "cart": { "items": ["object"], "total": "float" }
        }))
        .unwrap();

        let expected = FieldSchema::new()
            .field("items", FieldDef::required_array(FieldType::any_object()))
            .field("total", FieldDef::required_float());
        assert_eq!(schema.get("cart"), Some(&FieldDef::required_object(expected)));
    }

    #[test]
    fn test_unknown_type_name_names_path() {
        let err = parse_field_schema(&json!({ "cart": { "total": "decimal" } })).unwrap_err();
        assert!(err.contains("cart.total"));
        assert!(err.contains("decimal"));
    }

    #[test]
    fn test_multi_element_array_rejected() {
        assert!(parse_field_schema(&json!({ "pair": ["int", "string"] })).is_err());
    }

    #[test]
    fn test_non_object_schema_rejected() {
        assert!(parse_field_schema(&json!("string")).is_err());
        assert!(parse_field_schema(&json!({ "n": 5 })).is_err());
    }
}
