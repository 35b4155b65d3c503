//! Typed node construction
//!
//! The convenience boundary that resolves a registered type and
//! validates a candidate value in one step. Failures are descriptive
//! REJECT errors; callers pattern-match the `Result`.

use serde_json::Value;

use crate::schema::{SchemaError, SchemaResult};
use crate::validator;

use super::registry::TypeRegistry;

/// A value paired with the registered type it satisfies
#[derive(Debug, Clone, PartialEq)]
pub struct TypedNode {
    type_name: String,
    value: Value,
}

impl TypedNode {
    /// Resolves `type_name` and validates `value` against its schema.
    ///
    /// # Errors
    ///
    /// - `SHAPE_UNKNOWN_TYPE` when the name is not registered
    /// - `SHAPE_NODE_INVALID` when the value fails validation; the error
    ///   carries the full validation error list
    /// - `SHAPE_ASYNC_VALIDATOR` when the type's predicate must be awaited
    pub fn create(
        registry: &TypeRegistry,
        type_name: &str,
        value: Value,
    ) -> SchemaResult<TypedNode> {
        let def = registry
            .get_type(type_name)
            .ok_or_else(|| SchemaError::unknown_type(type_name))?;
        let verdict = validator::validate(&value, &def.schema)?;
        if !verdict.is_valid() {
            return Err(SchemaError::node_invalid(type_name, verdict.into_errors()));
        }
        Ok(TypedNode {
            type_name: type_name.to_string(),
            value,
        })
    }

    /// Returns the registered type name
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the validated value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes self and returns the value
    pub fn into_value(self) -> Value {
        self.value
    }
}
