//! Schema subsystem error types
//!
//! Error codes:
//! - SHAPE_UNKNOWN_TYPE (REJECT)
//! - SHAPE_NODE_INVALID (REJECT)
//! - SHAPE_DUPLICATE_TYPE (FATAL)
//! - SHAPE_ASYNC_VALIDATOR (FATAL)
//!
//! REJECT errors describe bad runtime data and are meant to be shown to
//! callers. FATAL errors are API misuse; they abort the current call.

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Bad runtime data, call rejected
    Reject,
    /// API misuse, call aborted
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Type name not present in the registry
    UnknownType,
    /// Attempt to register a name twice
    DuplicateType,
    /// Node construction given a value that fails validation
    NodeInvalid,
    /// Suspending predicate reached the synchronous engine
    AsyncValidator,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::UnknownType => "SHAPE_UNKNOWN_TYPE",
            SchemaErrorCode::DuplicateType => "SHAPE_DUPLICATE_TYPE",
            SchemaErrorCode::NodeInvalid => "SHAPE_NODE_INVALID",
            SchemaErrorCode::AsyncValidator => "SHAPE_ASYNC_VALIDATOR",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::DuplicateType | SchemaErrorCode::AsyncValidator => Severity::Fatal,
            _ => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Type name if applicable
    type_name: Option<String>,
    /// Validation errors if applicable
    errors: Vec<String>,
}

impl SchemaError {
    /// Create an unknown type error
    pub fn unknown_type(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::UnknownType,
            message: format!("Type '{}' is not registered", name),
            type_name: Some(name),
            errors: Vec::new(),
        }
    }

    /// Create a duplicate type registration error
    pub fn duplicate_type(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::DuplicateType,
            message: format!("Type '{}' is already registered", name),
            type_name: Some(name),
            errors: Vec::new(),
        }
    }

    /// Create a node construction error carrying the validation errors
    pub fn node_invalid(name: impl Into<String>, errors: Vec<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::NodeInvalid,
            message: format!(
                "Value does not satisfy type '{}': {}",
                name,
                errors.join("; ")
            ),
            type_name: Some(name),
            errors,
        }
    }

    /// Create an error for a suspending predicate in a synchronous call
    pub fn async_validator(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: SchemaErrorCode::AsyncValidator,
            message: format!(
                "Custom type '{}' carries an async validator; use validate_async",
                name
            ),
            type_name: Some(name),
            errors: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the type name if applicable
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Returns the validation errors if applicable
    pub fn validation_errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
