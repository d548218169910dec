//! Field-schema validation for union variants
//!
//! Each variant of a union declares a field schema. This module compiles a
//! schema into a `FieldValidator` that checks candidate records and hands
//! them back untouched when they match.
//!
//! # Principles
//!
//! - Declared fields are type-checked, undeclared fields pass through
//! - No coercion or defaults
//! - Validation never mutates its input
//! - Deterministic: first mismatch in declaration order is reported

mod descriptor;
mod errors;
mod types;
mod validator;

pub use descriptor::{parse_field_def, parse_field_schema};
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, ValidationDetails};
pub use types::{FieldDef, FieldSchema, FieldType};
pub use validator::{json_type_name, FieldValidator, ROOT_PATH};
