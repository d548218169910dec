//! CLI-specific error types

use std::fmt;
use std::io;

use crate::union::UnionError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Definition file missing, malformed or badly named
    DefinitionError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Input rejected by the registry
    Rejected,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::DefinitionError => "ADT_CLI_DEFINITION_ERROR",
            Self::IoError => "ADT_CLI_IO_ERROR",
            Self::Rejected => "ADT_CLI_REJECTED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn definition_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DefinitionError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Rejected, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<UnionError> for CliError {
    fn from(e: UnionError) -> Self {
        let message = format!("{}: {}", e.code(), e.message());
        if e.is_build_error() {
            Self::definition_error(message)
        } else {
            Self::rejected(message)
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
