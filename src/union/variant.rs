//! A single registered variant: constructor, predicate and validator.

use std::fmt;

use serde_json::{Map, Value};

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{json_type_name, FieldValidator, SchemaError, ValidationDetails, ROOT_PATH};

use super::errors::{UnionError, UnionResult};
use super::value::{Tagged, UnionValue, TYPE_KEY};

/// One case of a union.
///
/// `Display` yields the unnamespaced variant name, not the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    name: String,
    tag: String,
    validator: FieldValidator,
}

impl Variant {
    pub(crate) fn new(name: String, tag: String, validator: FieldValidator) -> Self {
        Self {
            name,
            tag,
            validator,
        }
    }

    /// Variant name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespaced tag stored in `type`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The compiled field validator, for direct reuse.
    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// Builds a tagged record from `fields`.
    ///
    /// `Value::Null` counts as an empty record. Extra keys pass through.
    ///
    /// # Errors
    ///
    /// Returns `UnionError::Schema` if the fields do not match the schema,
    /// or if they carry a `type` other than this variant's tag.
    pub fn construct(&self, fields: Value) -> UnionResult<UnionValue> {
        let body = match fields {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(self.reject(SchemaError::validation_failed(
                    Some(self.name.as_str()),
                    ValidationDetails::type_mismatch(ROOT_PATH, "object", json_type_name(&other)),
                )));
            }
        };

        if let Some(existing) = body.get(TYPE_KEY) {
            if existing.as_str() != Some(self.tag.as_str()) {
                return Err(self.reject(SchemaError::validation_failed(
                    Some(self.name.as_str()),
                    ValidationDetails::new(
                        TYPE_KEY,
                        format!("'{}' or absent", self.tag),
                        existing.to_string(),
                    ),
                )));
            }
        }

        if let Err(err) = self.validator.check_map(&body) {
            return Err(self.reject(err));
        }

        Ok(UnionValue::from_checked(
            self.tag.clone(),
            self.validator.schema(),
            body,
        ))
    }

    /// Constructs with no fields; fails if the schema has required fields.
    pub fn construct_empty(&self) -> UnionResult<UnionValue> {
        self.construct(Value::Null)
    }

    /// True iff `candidate` carries this variant's tag. Never fails.
    pub fn is<T: Tagged + ?Sized>(&self, candidate: &T) -> bool {
        candidate.type_tag() == Some(self.tag.as_str())
    }

    /// Checks a whole tagged object against this variant's schema and
    /// returns it unchanged.
    pub(crate) fn check(&self, object: Value) -> UnionResult<Value> {
        match self.validator.check_ref(&object) {
            Ok(()) => Ok(object),
            Err(err) => Err(self.reject(err)),
        }
    }

    fn reject(&self, err: SchemaError) -> UnionError {
        let field = err.details().map(|d| d.field.as_str()).unwrap_or_default();
        log_event_with_fields(
            Event::SchemaRejected,
            &[("tag", self.tag.as_str()), ("field", field)],
        );
        UnionError::Schema(err)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
