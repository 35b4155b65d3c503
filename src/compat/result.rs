//! Compatibility verdicts

use std::fmt;

/// Outcome of a compatibility check.
///
/// A reason is present exactly when the verdict is negative; the
/// representation makes the two inseparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityResult {
    reason: Option<String>,
}

impl CompatibilityResult {
    /// A positive verdict
    pub fn compatible() -> Self {
        Self { reason: None }
    }

    /// A negative verdict with a reason
    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// True when the source satisfies the target
    pub fn is_compatible(&self) -> bool {
        self.reason.is_none()
    }

    /// Returns the failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for CompatibilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            None => write!(f, "compatible"),
            Some(reason) => write!(f, "incompatible: {}", reason),
        }
    }
}
