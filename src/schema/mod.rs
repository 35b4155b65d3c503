//! Schema model subsystem
//!
//! Pure data definitions consumed by the validator and the compatibility
//! checker, plus the builder that constructs them.
//!
//! # Design Principles
//!
//! - Schemas are immutable values with no identity
//! - Construction goes through `SchemaBuilder` or deserialization
//! - Errors carry a code, a severity, and enough context to locate the problem

mod builder;
mod errors;
mod types;

pub use builder::SchemaBuilder;
pub use errors::{SchemaError, SchemaErrorCode, SchemaResult, Severity};
pub use types::{
    AsyncPredicate, CustomValidator, PrimitiveType, Schema, SyncPredicate, TypeDefinition,
};
