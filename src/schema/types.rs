//! Field type definitions
//!
//! Supported types:
//! - string: UTF-8 string
//! - int: 64-bit integer (signed or unsigned)
//! - bool: Boolean
//! - float: any JSON number
//! - any: any non-null value
//! - object: Nested object with field schema (empty schema = any object)
//! - array: Homogeneous array with element type

/// Supported field types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// 64-bit integer
    Int,
    /// Boolean
    Bool,
    /// Any number, integers included
    Float,
    /// Any non-null value
    Any,
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: FieldSchema,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        element_type: Box<FieldType>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Float => "float",
            FieldType::Any => "any",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
        }
    }

    /// An object with no declared fields; accepts any object.
    pub fn any_object() -> Self {
        FieldType::Object {
            fields: FieldSchema::new(),
        }
    }

    /// An array of the given element type.
    pub fn array_of(element_type: FieldType) -> Self {
        FieldType::Array {
            element_type: Box::new(element_type),
        }
    }
}

/// Field definition: a type plus whether the field must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field data type
    pub field_type: FieldType,
    /// Whether field must be present and non-null
    pub required: bool,
}

impl FieldDef {
    pub fn new(field_type: FieldType, required: bool) -> Self {
        Self {
            field_type,
            required,
        }
    }

    /// Create a required field of the given type
    pub fn required(field_type: FieldType) -> Self {
        Self::new(field_type, true)
    }

    /// Create an optional field of the given type
    pub fn optional(field_type: FieldType) -> Self {
        Self::new(field_type, false)
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::required(FieldType::String)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::optional(FieldType::String)
    }

    /// Create a required int field
    pub fn required_int() -> Self {
        Self::required(FieldType::Int)
    }

    /// Create an optional int field
    pub fn optional_int() -> Self {
        Self::optional(FieldType::Int)
    }

    /// Create a required bool field
    pub fn required_bool() -> Self {
        Self::required(FieldType::Bool)
    }

    /// Create a required float field
    pub fn required_float() -> Self {
        Self::required(FieldType::Float)
    }

    /// Create a required object field
    pub fn required_object(fields: FieldSchema) -> Self {
        Self::required(FieldType::Object { fields })
    }

    /// Create an optional object field
    pub fn optional_object(fields: FieldSchema) -> Self {
        Self::optional(FieldType::Object { fields })
    }

    /// Create a required array field
    pub fn required_array(element_type: FieldType) -> Self {
        Self::required(FieldType::array_of(element_type))
    }

    /// Create an optional array field
    pub fn optional_array(element_type: FieldType) -> Self {
        Self::optional(FieldType::array_of(element_type))
    }
}

/// Ordered set of named field definitions.
///
/// Declaration order is kept so error reporting and schema listings follow
/// the order the author wrote. Re-declaring a field replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<(String, FieldDef)>,
}

impl FieldSchema {
    /// Create an empty schema (no declared fields)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn field(mut self, name: impl Into<String>, def: FieldDef) -> Self {
        self.insert(name, def);
        self
    }

    /// Insert or replace a field definition
    pub fn insert(&mut self, name: impl Into<String>, def: FieldDef) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = def,
            None => self.fields.push((name, def)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDef)> {
        self.fields.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Names of fields that must be present
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|(_, d)| d.required).map(|(n, _)| n)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
