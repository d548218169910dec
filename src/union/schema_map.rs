//! Declarative description of a union: variant names to field schemas,
//! plus the optional `meta` entry.

use crate::schema::FieldSchema;

use super::meta::Meta;

/// Ordered mapping from variant name to field schema, plus registry options.
///
/// Names are not checked here; `UnionRegistry::build` enforces the naming
/// convention so a bad map fails as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMap {
    meta: Option<Meta>,
    variants: Vec<(String, FieldSchema)>,
}

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `meta` entry.
    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Builder-style variant declaration.
    pub fn variant(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.insert_variant(name, schema);
        self
    }

    pub fn set_meta(&mut self, meta: Meta) {
        self.meta = Some(meta);
    }

    /// Declares a variant. Re-declaring a name replaces its schema in place.
    pub fn insert_variant(&mut self, name: impl Into<String>, schema: FieldSchema) {
        let name = name.into();
        match self.variants.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = schema,
            None => self.variants.push((name, schema)),
        }
    }

    pub fn get_meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Variant declarations in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.variants.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// Number of declared variants (the `meta` entry is not counted).
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Meta, Vec<(String, FieldSchema)>) {
        (self.meta.unwrap_or_default(), self.variants)
    }
}
