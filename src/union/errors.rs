//! # Union Errors

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for union operations
pub type UnionResult<T> = Result<T, UnionError>;

/// Union errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionError {
    #[error("Type name `{name}` should not start with lowercase")]
    Naming { name: String },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Expected `type` property")]
    Untyped,

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("{0}")]
    Definition(SchemaError),
}

impl UnionError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            UnionError::Naming { .. } => "ADT_NAMING_VIOLATION",
            UnionError::Schema(_) => "ADT_SCHEMA_VALIDATION_FAILED",
            UnionError::Untyped => "ADT_UNTYPED_VALUE",
            UnionError::UnknownVariant(_) => "ADT_UNKNOWN_VARIANT",
            UnionError::Definition(_) => "ADT_MALFORMED_DEFINITION",
        }
    }

    /// Message without the code prefix that `SchemaError`'s `Display` adds.
    pub fn message(&self) -> String {
        match self {
            UnionError::Schema(inner) | UnionError::Definition(inner) => inner.message().to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the error was raised while building a registry rather than
    /// while checking a value.
    pub fn is_build_error(&self) -> bool {
        matches!(
            self,
            UnionError::Naming { .. } | UnionError::Definition(_)
        )
    }
}
