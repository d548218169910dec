//! Union values: a tag, the variant's validated fields, and whatever extra
//! fields the caller supplied.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::schema::FieldSchema;

/// Discriminant key carried by every union value.
pub const TYPE_KEY: &str = "type";

/// Anything that may carry a string `type` tag.
pub trait Tagged {
    /// The `type` tag, if present and a string.
    fn type_tag(&self) -> Option<&str>;
}

impl Tagged for Value {
    fn type_tag(&self) -> Option<&str> {
        self.get(TYPE_KEY).and_then(Value::as_str)
    }
}

impl Tagged for Map<String, Value> {
    fn type_tag(&self) -> Option<&str> {
        self.get(TYPE_KEY).and_then(Value::as_str)
    }
}

impl Tagged for UnionValue {
    fn type_tag(&self) -> Option<&str> {
        Some(&self.tag)
    }
}

/// A constructed value of one variant.
///
/// Declared fields and extension fields are kept apart; `into_value`
/// flattens them back into one record with `type` first and the rest in
/// the order the caller supplied them.
#[derive(Debug, Clone)]
pub struct UnionValue {
    tag: String,
    fields: Map<String, Value>,
    extensions: Map<String, Value>,
    order: Vec<String>,
}

impl UnionValue {
    /// Splits an already validated body into declared and extension fields.
    /// Any `type` key in `body` is dropped in favor of `tag`.
    pub(crate) fn from_checked(tag: String, schema: &FieldSchema, body: Map<String, Value>) -> Self {
        let mut fields = Map::new();
        let mut extensions = Map::new();
        let mut order = Vec::with_capacity(body.len());
        for (key, value) in body {
            if key == TYPE_KEY {
                continue;
            }
            order.push(key.clone());
            if schema.contains(&key) {
                fields.insert(key, value);
            } else {
                extensions.insert(key, value);
            }
        }
        Self {
            tag,
            fields,
            extensions,
            order,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Fields declared by the variant's schema that were supplied.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fields the schema does not declare, passed through untouched.
    pub fn extensions(&self) -> &Map<String, Value> {
        &self.extensions
    }

    /// Looks up a declared or extension field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).or_else(|| self.extensions.get(key))
    }

    /// Flattens into a single JSON object.
    pub fn into_value(self) -> Value {
        let Self {
            tag,
            mut fields,
            mut extensions,
            order,
        } = self;

        let mut record = Map::with_capacity(1 + order.len());
        record.insert(TYPE_KEY.to_string(), Value::String(tag));
        for key in order {
            if let Some(value) = fields.remove(&key).or_else(|| extensions.remove(&key)) {
                record.insert(key, value);
            }
        }
        Value::Object(record)
    }

    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }
}

/// Key order is not part of equality.
impl PartialEq for UnionValue {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.fields == other.fields && self.extensions == other.extensions
    }
}

impl From<UnionValue> for Value {
    fn from(value: UnionValue) -> Self {
        value.into_value()
    }
}

impl Serialize for UnionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.order.len()))?;
        map.serialize_entry(TYPE_KEY, &self.tag)?;
        for key in &self.order {
            if let Some(value) = self.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
