//! Validation verdicts

use std::fmt;

/// Outcome of validating a value against a schema.
///
/// The verdict is valid exactly when `errors` is empty; the two can
/// never disagree because validity is derived, not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// A verdict with no errors
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// Builds a verdict from accumulated errors
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// True when no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors in the order they were found
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the number of errors
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Consumes self and returns the inner Vec
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
