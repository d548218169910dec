//! Schema error types
//!
//! Error codes:
//! - ADT_SCHEMA_VALIDATION_FAILED: value does not match a field schema
//! - ADT_MALFORMED_DEFINITION: a schema description could not be parsed

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Value violates schema
    AdtSchemaValidationFailed,
    /// Schema description is malformed
    AdtMalformedDefinition,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::AdtSchemaValidationFailed => "ADT_SCHEMA_VALIDATION_FAILED",
            SchemaErrorCode::AdtMalformedDefinition => "ADT_MALFORMED_DEFINITION",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDetails {
    /// Field path (e.g., "cart.items[2]")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(field, "field to be present", "missing")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(field, expected, actual)
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(field, "non-null value", "null")
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Schema error type with full context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Variant the failing schema belongs to, if known
    variant: Option<String>,
    details: Option<ValidationDetails>,
}

impl SchemaError {
    /// Create a validation failed error
    pub fn validation_failed(variant: Option<&str>, details: ValidationDetails) -> Self {
        let message = match variant {
            Some(name) => format!("`{}` validation failed: {}", name, details),
            None => format!("Validation failed: {}", details),
        };
        Self {
            code: SchemaErrorCode::AdtSchemaValidationFailed,
            message,
            variant: variant.map(str::to_string),
            details: Some(details),
        }
    }

    /// Create an error for a malformed schema description
    pub fn malformed_definition(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::AdtMalformedDefinition,
            message: format!("Malformed definition '{}': {}", origin.into(), reason.into()),
            variant: None,
            details: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the variant name if applicable
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Returns validation details if applicable
    pub fn details(&self) -> Option<&ValidationDetails> {
        self.details.as_ref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SchemaErrorCode::AdtSchemaValidationFailed.code(),
            "ADT_SCHEMA_VALIDATION_FAILED"
        );
        assert_eq!(
            SchemaErrorCode::AdtMalformedDefinition.code(),
            "ADT_MALFORMED_DEFINITION"
        );
    }

    #[test]
    fn test_validation_details_display() {
        let details = ValidationDetails::type_mismatch("age", "int", "string");
        let display = format!("{}", details);
        assert!(display.contains("age"));
        assert!(display.contains("int"));
        assert!(display.contains("string"));
    }

    #[test]
    fn test_error_names_variant() {
        let err = SchemaError::validation_failed(
            Some("AddToCart"),
            ValidationDetails::missing_field("productId"),
        );
        assert_eq!(err.variant(), Some("AddToCart"));
        let display = format!("{}", err);
        assert!(display.contains("ADT_SCHEMA_VALIDATION_FAILED"));
        assert!(display.contains("AddToCart"));
        assert!(display.contains("productId"));
    }

    #[test]
    fn test_malformed_definition_has_no_details() {
        let err = SchemaError::malformed_definition("actions.json", "expected an object");
        assert_eq!(err.code(), SchemaErrorCode::AdtMalformedDefinition);
        assert!(err.details().is_none());
        assert!(err.message().contains("actions.json"));
    }
}
