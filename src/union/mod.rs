//! Algebraic (tagged-union) types built at runtime
//!
//! A `SchemaMap` names each variant and its field schema. Building it into a
//! `UnionRegistry` yields, per variant, a constructor that tags and checks a
//! record and a predicate on the tag, plus union-wide `validate` and
//! `has_type`.
//!
//! # Rules
//!
//! - Variant names must not start with a lowercase letter
//! - `meta` is reserved for registry options (`namespace`)
//! - Tag = namespace + variant name
//! - `validate` checks known tags, passes foreign tags, rejects untyped values
//!
//! # Usage
//!
//! ```
//! use algebraic_type::schema::{FieldDef, FieldSchema};
//! use algebraic_type::union::{Meta, SchemaMap, UnionRegistry};
//! use serde_json::json;
//!
//! let actions = UnionRegistry::build(
//!     SchemaMap::new()
//!         .meta(Meta::with_namespace("cart/"))
//!         .variant("AddToCart", FieldSchema::new().field("productId", FieldDef::required_string()))
//!         .variant("CheckoutRequest", FieldSchema::new()),
//! )
//! .unwrap();
//!
//! let add = actions.construct("AddToCart", json!({ "productId": "p1" })).unwrap();
//! assert_eq!(add.tag(), "cart/AddToCart");
//! assert!(actions.is("AddToCart", &add));
//! assert!(actions.has_type("cart/CheckoutRequest"));
//! ```

mod errors;
mod loader;
mod meta;
mod registry;
mod schema_map;
mod value;
mod variant;

pub use errors::{UnionError, UnionResult};
pub use loader::{SchemaLoader, IN_MEMORY};
pub use meta::{Meta, META_KEY};
pub use registry::{Dispatch, UnionRegistry};
pub use schema_map::SchemaMap;
pub use value::{Tagged, UnionValue, TYPE_KEY};
pub use variant::Variant;
