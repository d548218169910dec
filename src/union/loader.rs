//! Loads union definitions from JSON
//!
//! A definition is one JSON object. The `meta` key holds registry options;
//! every other key declares a variant with a field schema written in the
//! descriptor syntax of `schema::parse_field_schema`. Key order is
//! declaration order.
//!
//! Naming rules are not checked here; they apply when the registry is built.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::schema::{parse_field_schema, SchemaError};

use super::errors::{UnionError, UnionResult};
use super::meta::{Meta, META_KEY};
use super::schema_map::SchemaMap;

/// Origin reported for definitions that did not come from a file.
pub const IN_MEMORY: &str = "<in-memory>";

/// Reads definitions into `SchemaMap`s.
pub struct SchemaLoader;

impl SchemaLoader {
    /// Loads a definition file.
    pub fn load_file(path: &Path) -> UnionResult<SchemaMap> {
        let origin = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| malformed(&origin, format!("Failed to read file: {}", e)))?;
        Self::parse_str(&content, &origin)
    }

    /// Parses definition text. `origin` only labels errors and logs.
    pub fn parse_str(text: &str, origin: &str) -> UnionResult<SchemaMap> {
        let definition: Value = serde_json::from_str(text)
            .map_err(|e| malformed(origin, format!("Invalid JSON: {}", e)))?;
        Self::parse_with_origin(&definition, origin)
    }

    /// Parses an in-memory definition.
    pub fn parse_value(definition: &Value) -> UnionResult<SchemaMap> {
        Self::parse_with_origin(definition, IN_MEMORY)
    }

    fn parse_with_origin(definition: &Value, origin: &str) -> UnionResult<SchemaMap> {
        let entries = definition
            .as_object()
            .ok_or_else(|| malformed(origin, "definition must be a JSON object"))?;

        let mut map = SchemaMap::new();
        for (name, entry) in entries {
            if name == META_KEY {
                let meta: Meta = serde_json::from_value(entry.clone())
                    .map_err(|e| malformed(origin, format!("meta: {}", e)))?;
                map.set_meta(meta);
                continue;
            }

            let schema = parse_field_schema(entry)
                .map_err(|e| malformed(origin, format!("variant '{}': {}", name, e)))?;
            map.insert_variant(name.clone(), schema);
        }

        let count = map.len().to_string();
        log_event_with_fields(
            Event::DefinitionLoaded,
            &[("origin", origin), ("variants", count.as_str())],
        );

        Ok(map)
    }
}

fn malformed(origin: &str, reason: impl Into<String>) -> UnionError {
    UnionError::Definition(SchemaError::malformed_definition(origin, reason))
}
