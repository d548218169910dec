//! The union registry: one constructor and predicate per variant, plus the
//! union-wide `validate` and `has_type`.
//!
//! A registry is built once from a `SchemaMap` and never changes afterwards.
//! Tag dispatch goes through explicit name and tag indexes; nothing is
//! looked up by reflection, so names like `hasOwnProperty` or `__proto__`
//! are tags only if someone declared them.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};
use crate::schema::FieldValidator;

use super::errors::{UnionError, UnionResult};
use super::loader::SchemaLoader;
use super::schema_map::SchemaMap;
use super::value::{Tagged, UnionValue, TYPE_KEY};
use super::variant::Variant;

/// How a value relates to a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch<'r> {
    /// The value's tag belongs to this variant
    Known(&'r Variant),
    /// The value is tagged, but not by this registry
    Foreign,
    /// The value has no usable `type`
    Untyped,
}

/// Immutable set of variants built from a schema map.
#[derive(Debug, Clone)]
pub struct UnionRegistry {
    namespace: String,
    variants: Vec<Variant>,
    by_name: HashMap<String, usize>,
    by_tag: HashMap<String, usize>,
}

impl UnionRegistry {
    /// Builds a registry.
    ///
    /// # Errors
    ///
    /// Returns `UnionError::Naming` for a variant name starting with a
    /// lowercase letter, `meta` included. No registry is produced.
    pub fn build(schema_map: SchemaMap) -> UnionResult<Self> {
        let (meta, declared) = schema_map.into_parts();

        let mut variants = Vec::with_capacity(declared.len());
        let mut by_name = HashMap::with_capacity(declared.len());
        let mut by_tag = HashMap::with_capacity(declared.len());

        for (name, schema) in declared {
            check_variant_name(&name)?;

            let tag = meta.tag_for(&name);
            let validator = FieldValidator::compile(&schema).labeled(name.as_str());

            log_event_with_fields(
                Event::VariantRegistered,
                &[("name", name.as_str()), ("tag", tag.as_str())],
            );

            let index = variants.len();
            by_name.insert(name.clone(), index);
            by_tag.insert(tag.clone(), index);
            variants.push(Variant::new(name, tag, validator));
        }

        let count = variants.len().to_string();
        log_event_with_fields(
            Event::RegistryBuilt,
            &[("namespace", meta.namespace.as_str()), ("variants", count.as_str())],
        );

        Ok(Self {
            namespace: meta.namespace,
            variants,
            by_name,
            by_tag,
        })
    }

    /// Parses a JSON definition and builds a registry from it.
    pub fn from_definition(definition: &Value) -> UnionResult<Self> {
        Self::build(SchemaLoader::parse_value(definition)?)
    }

    /// Loads a JSON definition file and builds a registry from it.
    pub fn from_path(path: &Path) -> UnionResult<Self> {
        Self::build(SchemaLoader::load_file(path)?)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Variants in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.variants.iter()
    }

    /// Registered tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(Variant::tag)
    }

    /// Looks up a variant by its unnamespaced name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.by_name.get(name).map(|&i| &self.variants[i])
    }

    /// Looks up a variant by its tag.
    pub fn variant_by_tag(&self, tag: &str) -> Option<&Variant> {
        self.by_tag.get(tag).map(|&i| &self.variants[i])
    }

    /// Constructs a value of the named variant.
    ///
    /// # Errors
    ///
    /// `UnionError::UnknownVariant` if no such variant was declared,
    /// otherwise whatever `Variant::construct` returns.
    pub fn construct(&self, name: &str, fields: Value) -> UnionResult<UnionValue> {
        self.variant(name)
            .ok_or_else(|| UnionError::UnknownVariant(name.to_string()))?
            .construct(fields)
    }

    /// True iff `candidate` carries the tag of the named variant. False for
    /// undeclared names.
    pub fn is<T: Tagged + ?Sized>(&self, name: &str, candidate: &T) -> bool {
        self.variant(name).is_some_and(|v| v.is(candidate))
    }

    /// True iff `tag` is the tag of a declared variant.
    pub fn has_type(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// Classifies a value against this registry.
    ///
    /// A `type` that is absent, `null`, `false`, `0` or `""` is untyped. A
    /// non-string `type` that is none of those is foreign.
    pub fn dispatch(&self, value: &Value) -> Dispatch<'_> {
        match value.get(TYPE_KEY) {
            None => Dispatch::Untyped,
            Some(tag) if !is_truthy(tag) => Dispatch::Untyped,
            Some(Value::String(tag)) => match self.variant_by_tag(tag) {
                Some(variant) => Dispatch::Known(variant),
                None => Dispatch::Foreign,
            },
            Some(_) => Dispatch::Foreign,
        }
    }

    /// Checks a tagged object against the whole union.
    ///
    /// Known tags are checked against their variant's schema; the object is
    /// returned as-is (moved back, never copied) when it matches. Foreign
    /// tags pass through unchecked.
    ///
    /// # Errors
    ///
    /// `UnionError::Untyped` if the object has no usable `type`;
    /// `UnionError::Schema` if a known variant's schema rejects it.
    pub fn validate(&self, object: Value) -> UnionResult<Value> {
        match self.dispatch(&object) {
            Dispatch::Known(variant) => variant.check(object),
            Dispatch::Foreign => {
                let tag = tag_label(object.get(TYPE_KEY));
                log_event_with_fields(Event::ForeignTagPassed, &[("tag", tag.as_str())]);
                Ok(object)
            }
            Dispatch::Untyped => {
                log_event_with_fields(Event::UntypedRejected, &[]);
                Err(UnionError::Untyped)
            }
        }
    }

    /// Borrowing form of `validate`.
    pub fn validate_ref(&self, object: &Value) -> UnionResult<()> {
        match self.dispatch(object) {
            Dispatch::Known(variant) => {
                variant.validator().check_ref(object).map_err(UnionError::from)
            }
            Dispatch::Foreign => Ok(()),
            Dispatch::Untyped => Err(UnionError::Untyped),
        }
    }
}

impl TryFrom<SchemaMap> for UnionRegistry {
    type Error = UnionError;

    fn try_from(schema_map: SchemaMap) -> UnionResult<Self> {
        Self::build(schema_map)
    }
}

/// Covers `meta` too, which is never a variant.
fn check_variant_name(name: &str) -> UnionResult<()> {
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Ok(());
    }
    log_event_with_fields(Event::NamingRejected, &[("name", name)]);
    Err(UnionError::Naming {
        name: name.to_string(),
    })
}

/// Log form of a `type` value: strings bare, anything else as JSON.
fn tag_label(tag: Option<&Value>) -> String {
    match tag {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDef, FieldSchema, FieldType};
    use crate::union::meta::Meta;
    use serde_json::json;

    fn shop_actions(namespace: &str) -> UnionRegistry {
        let map = SchemaMap::new()
            .meta(Meta::with_namespace(namespace))
            .variant(
                "ReceiveProducts",
                FieldSchema::new()
                    .field("products", FieldDef::required_array(FieldType::any_object())),
            )
            .variant(
                "AddToCart",
                FieldSchema::new().field("productId", FieldDef::required_string()),
            )
            .variant("CheckoutRequest", FieldSchema::new());
        UnionRegistry::build(map).unwrap()
    }

    #[test]
    fn test_one_entry_per_variant() {
        let registry = shop_actions("");
        assert_eq!(registry.len(), 3);
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(tags, vec!["ReceiveProducts", "AddToCart", "CheckoutRequest"]);
    }

    #[test]
    fn test_lowercase_name_rejected() {
        let map = SchemaMap::new()
            .variant("Fine", FieldSchema::new())
            .variant("lowerCase", FieldSchema::new());
        let err = UnionRegistry::build(map).unwrap_err();
        assert_eq!(
            err,
            UnionError::Naming {
                name: "lowerCase".into()
            }
        );
    }

    #[test]
    fn test_meta_as_variant_is_naming_error() {
        let map = SchemaMap::new().variant("meta", FieldSchema::new());
        let err = UnionRegistry::build(map).unwrap_err();
        assert_eq!(err, UnionError::Naming { name: "meta".into() });
        assert_eq!(err.code(), "ADT_NAMING_VIOLATION");
    }

    #[test]
    fn test_non_letter_leading_names_allowed() {
        let map = SchemaMap::new()
            .variant("_Internal", FieldSchema::new())
            .variant("@@INIT", FieldSchema::new());
        let registry = UnionRegistry::build(map).unwrap();
        assert!(registry.has_type("_Internal"));
        assert!(registry.has_type("@@INIT"));
    }

    #[test]
    fn test_dispatch() {
        let registry = shop_actions("shop/");
        let known = json!({ "type": "shop/AddToCart" });
        match registry.dispatch(&known) {
            Dispatch::Known(v) => assert_eq!(v.name(), "AddToCart"),
            other => panic!("unexpected dispatch: {other:?}"),
        }
        assert_eq!(registry.dispatch(&json!({ "type": "AddToCart" })), Dispatch::Foreign);
        assert_eq!(registry.dispatch(&json!({ "type": 7 })), Dispatch::Foreign);
        assert_eq!(registry.dispatch(&json!({})), Dispatch::Untyped);
        assert_eq!(registry.dispatch(&json!({ "type": "" })), Dispatch::Untyped);
        assert_eq!(registry.dispatch(&json!({ "type": 0 })), Dispatch::Untyped);
        assert_eq!(registry.dispatch(&json!({ "type": false })), Dispatch::Untyped);
        assert_eq!(registry.dispatch(&json!({ "type": null })), Dispatch::Untyped);
        assert_eq!(registry.dispatch(&json!("AddToCart")), Dispatch::Untyped);
    }

    #[test]
    fn test_validate_ref_matches_validate() {
        let registry = shop_actions("");
        for value in [
            json!({ "type": "AddToCart", "productId": "p" }),
            json!({ "type": "AddToCart", "productId": 1 }),
            json!({ "type": "@@redux/INIT" }),
            json!({ "products": [] }),
        ] {
            assert_eq!(
                registry.validate_ref(&value).is_ok(),
                registry.validate(value).is_ok()
            );
        }
    }

    #[test]
    fn test_construct_unknown_variant() {
        let registry = shop_actions("");
        assert_eq!(
            registry.construct("Nyan", json!({})).unwrap_err(),
            UnionError::UnknownVariant("Nyan".into())
        );
    }

    #[test]
    fn test_is_unknown_name_is_false() {
        let registry = shop_actions("");
        assert!(!registry.is("Nyan", &json!({ "type": "Nyan" })));
    }

    #[test]
    fn test_try_from_schema_map() {
        let registry = UnionRegistry::try_from(SchemaMap::new()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.namespace(), "");
    }

    #[test]
    fn test_tag_label() {
        assert_eq!(tag_label(Some(&json!("@@redux/INIT"))), "@@redux/INIT");
        assert_eq!(tag_label(Some(&json!(7))), "7");
        assert_eq!(tag_label(Some(&json!(["A"]))), "[\"A\"]");
        assert_eq!(tag_label(None), "");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(true)));
    }
}
