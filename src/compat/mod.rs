//! Compatibility subsystem
//!
//! Decides directional structural compatibility between two schemas, or
//! between two registered type names. Independent of the validator; the
//! registry is only consulted by the name-keyed entry points.

mod checker;
mod result;

pub use checker::{are_compatible, check_compatibility, CompatibilityChecker};
pub use result::CompatibilityResult;
